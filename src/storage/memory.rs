//! In-memory repository backed by a `Vec` behind a single async mutex.

use crate::domain::model::Record;
use crate::storage::repository::{Repository, RepositoryError, RepositoryResult};
use async_trait::async_trait;
use tokio::sync::Mutex;

pub struct InMemoryRepository<T> {
    inner: Mutex<Collection<T>>,
}

struct Collection<T> {
    records: Vec<T>,
    next_id: u64,
}

impl<T: Record> Collection<T> {
    fn position(&self, id: u64) -> RepositoryResult<usize> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(RepositoryError::NotFound {
                resource: T::RESOURCE,
                id,
            })
    }
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Creates a repository holding `records`. New ids start after the highest seeded id.
    pub fn with_records(records: Vec<T>) -> Self {
        let next_id = records.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Collection { records, next_id }),
        }
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Vec<T> {
        self.inner.lock().await.records.clone()
    }

    async fn get_by_id(&self, id: u64) -> RepositoryResult<T> {
        let collection = self.inner.lock().await;
        let index = collection.position(id)?;
        Ok(collection.records[index].clone())
    }

    async fn insert(&self, draft: T::Draft) -> T {
        let mut collection = self.inner.lock().await;
        let id = collection.next_id;
        collection.next_id += 1;
        let record = T::from_draft(id, draft);
        collection.records.push(record.clone());
        tracing::debug!(resource = T::RESOURCE, id, "record inserted");
        record
    }

    async fn update(&self, id: u64, patch: T::Draft) -> RepositoryResult<T> {
        let mut collection = self.inner.lock().await;
        let index = collection.position(id)?;
        let record = &mut collection.records[index];
        record.apply(patch);
        tracing::debug!(resource = T::RESOURCE, id, "record updated");
        Ok(record.clone())
    }

    async fn delete(&self, id: u64) -> RepositoryResult<T> {
        let mut collection = self.inner.lock().await;
        let index = collection.position(id)?;
        tracing::debug!(resource = T::RESOURCE, id, "record deleted");
        Ok(collection.records.remove(index))
    }
}
