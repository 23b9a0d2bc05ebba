use thiserror::Error;

/// The single failure kind surfaced by every store operation.
///
/// The application does not distinguish validation, network,
/// authorization, or conflict failures; all of them reach the operator
/// as one message-bearing notification.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        StoreError {
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::new(e.to_string())
    }
}

impl<E: std::error::Error + 'static> From<rusoto_core::RusotoError<E>> for StoreError {
    fn from(e: rusoto_core::RusotoError<E>) -> Self {
        StoreError::new(e.to_string())
    }
}

impl From<url::ParseError> for StoreError {
    fn from(e: url::ParseError) -> Self {
        StoreError::new(e.to_string())
    }
}
