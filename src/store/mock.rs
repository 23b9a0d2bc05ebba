use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use futures::future::{BoxFuture, FutureExt};
use url::{ParseError, Url};

use crate::errors::StoreError;
use crate::store::ObjectStore;

/// An object store that keeps everything in a map, for tests and
/// non-networked runs. Failures can be injected to exercise upload
/// error paths.
#[derive(Default)]
pub struct MockStore {
    saved: RwLock<HashMap<String, (String, Vec<u8>)>>,
    failure: Mutex<Option<String>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    pub fn saved_count(&self) -> usize {
        self.saved.read().unwrap().len()
    }

    /// The content type and bytes saved under `key`, if any.
    pub fn saved(&self, key: &str) -> Option<(String, Vec<u8>)> {
        self.saved.read().unwrap().get(key).cloned()
    }

    /// All keys saved so far, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        self.saved.read().unwrap().keys().cloned().collect()
    }
}

impl ObjectStore for MockStore {
    fn save(
        &self,
        key: &str,
        content_type: String,
        raw: Vec<u8>,
    ) -> BoxFuture<Result<(), StoreError>> {
        let key = key.to_owned();

        async move {
            if let Some(message) = &*self.failure.lock().unwrap() {
                return Err(StoreError::new(message.clone()));
            }

            self.saved
                .write()
                .unwrap()
                .insert(key, (content_type, raw));

            Ok(())
        }
        .boxed()
    }

    fn public_url(&self, key: &str) -> Result<Url, ParseError> {
        Url::parse("https://objects.test/")?.join(key)
    }
}
