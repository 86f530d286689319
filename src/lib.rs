pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::model::{Product, ProductDraft, Record, User, UserDraft};
pub use infra::config::{AppConfig, Environment};
pub use storage::{InMemoryRepository, Repository, RepositoryError};
