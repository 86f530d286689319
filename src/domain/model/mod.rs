//! Domain records served by the API.

pub mod product;
pub mod seed;
pub mod user;

pub use product::{Product, ProductDraft, ProductFilter};
pub use user::{User, UserDraft, UserFilter};

/// Trait that defines the contract for any record kept in a repository.
///
/// Repositories stay generic over the record type; each record provides:
/// - its resource name (used in not-found messages)
/// - its id
/// - how a validated draft becomes a stored record, and how an update draft applies
pub trait Record: Clone + Send + Sync + 'static {
    /// The validated input accepted on create and update.
    type Draft: Send + 'static;

    /// Singular resource name, e.g. `product`.
    const RESOURCE: &'static str;

    fn id(&self) -> u64;

    /// Builds a new record from a draft and a freshly assigned id.
    fn from_draft(id: u64, draft: Self::Draft) -> Self;

    /// Replaces the record's fields with the draft's. The id never changes.
    fn apply(&mut self, draft: Self::Draft);
}
