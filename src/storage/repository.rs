//! Repository contract shared by every record collection.

use crate::domain::model::Record;
use async_trait::async_trait;
use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No record carries the requested id.
    #[error("{resource} with id {id} not found")]
    NotFound { resource: &'static str, id: u64 },
}

/// Mutation contract over a collection of records.
///
/// Implementations own id assignment: `insert` hands out ids from a monotonic
/// counter, so an id is never reused after a delete.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// All records, in insertion order.
    async fn list(&self) -> Vec<T>;

    async fn get_by_id(&self, id: u64) -> RepositoryResult<T>;

    /// Stores a new record under a freshly assigned id and returns it.
    async fn insert(&self, draft: T::Draft) -> T;

    /// Applies `patch` to the stored record and returns the updated record.
    async fn update(&self, id: u64, patch: T::Draft) -> RepositoryResult<T>;

    /// Removes the record and returns its pre-deletion snapshot.
    async fn delete(&self, id: u64) -> RepositoryResult<T>;
}
