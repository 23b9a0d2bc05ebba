use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

/// The signed-in operator, as reported by the identity service.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct User {
    pub email: String,
}

/// The external session collaborator the admin page gates on. Its
/// internals (token refresh, login flow) live in the hosted backend
/// and are not this crate's concern.
pub trait Session: Send + Sync {
    /// Whether the session is still being resolved.
    fn loading(&self) -> bool;

    fn current_user(&self) -> Option<User>;

    fn sign_out(&self) -> BoxFuture<Result<(), StoreError>>;
}
