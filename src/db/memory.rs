use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};

use futures::future::BoxFuture;
use futures::FutureExt;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::records::{Profile, ProfileFields, Resource, Times};

use super::{Db, ProfileDb};

/// An in-memory stand-in for one resource of the hosted store. Rows
/// live in a vector and are sorted on the way out, like the real store
/// orders its listings. Failures can be injected to exercise error
/// paths.
pub struct MemoryDb<R: Resource> {
    rows: RwLock<Vec<R>>,
    failure: Mutex<Option<String>>,
    writes: AtomicUsize,
}

impl<R: Resource> Default for MemoryDb<R> {
    fn default() -> Self {
        MemoryDb {
            rows: RwLock::new(vec![]),
            failure: Mutex::new(None),
            writes: AtomicUsize::new(0),
        }
    }
}

impl<R: Resource> MemoryDb<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent operation fail with the given message
    /// until [`clear_failure`](Self::clear_failure) is called.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    pub fn clear_failure(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// The number of write operations (inserts, updates, deletes)
    /// dispatched so far, including ones that failed.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// The raw rows in insertion order, without the listing sort.
    pub fn rows(&self) -> Vec<R> {
        self.rows.read().unwrap().clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        match &*self.failure.lock().unwrap() {
            Some(message) => Err(StoreError::new(message.clone())),
            None => Ok(()),
        }
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

impl<R: Resource> Db<R> for MemoryDb<R> {
    fn list(&self) -> BoxFuture<Result<Vec<R>, StoreError>> {
        async move {
            self.check()?;

            let mut rows = self.rows.read().unwrap().clone();
            rows.sort_by(R::cmp_order);

            Ok(rows)
        }
        .boxed()
    }

    fn insert(&self, fields: R::Fields) -> BoxFuture<Result<(), StoreError>> {
        async move {
            self.record_write();
            self.check()?;

            self.rows
                .write()
                .unwrap()
                .push(R::new(Uuid::new_v4(), Times::now(), fields));

            Ok(())
        }
        .boxed()
    }

    fn update(&self, id: &Uuid, fields: R::Fields) -> BoxFuture<Result<(), StoreError>> {
        let id = *id;

        async move {
            self.record_write();
            self.check()?;

            let mut rows = self.rows.write().unwrap();

            // an update of a vanished row is silently lost, as in the
            // hosted store
            if let Some(row) = rows.iter_mut().find(|row| *row.id() == id) {
                let times = Times {
                    created_at: row.times().created_at,
                    updated_at: time::OffsetDateTime::now_utc(),
                };

                *row = R::new(id, times, fields);
            }

            Ok(())
        }
        .boxed()
    }

    fn delete(&self, id: &Uuid) -> BoxFuture<Result<(), StoreError>> {
        let id = *id;

        async move {
            self.record_write();
            self.check()?;

            self.rows.write().unwrap().retain(|row| *row.id() != id);

            Ok(())
        }
        .boxed()
    }
}

impl ProfileDb for MemoryDb<Profile> {
    fn get(&self) -> BoxFuture<Result<Option<Profile>, StoreError>> {
        async move {
            self.check()?;

            Ok(self.rows.read().unwrap().first().cloned())
        }
        .boxed()
    }

    fn insert(&self, fields: ProfileFields) -> BoxFuture<Result<(), StoreError>> {
        Db::insert(self, fields)
    }

    fn update(&self, id: &Uuid, fields: ProfileFields) -> BoxFuture<Result<(), StoreError>> {
        Db::update(self, id, fields)
    }
}
