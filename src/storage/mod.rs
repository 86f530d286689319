pub mod memory;
pub mod repository;

pub use memory::InMemoryRepository;
pub use repository::{Repository, RepositoryError, RepositoryResult};
