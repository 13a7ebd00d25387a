//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for collection persistence.
//! Implementations can use a flat file, in-memory, etc.

use async_trait::async_trait;

use crate::domain::{DomainResult, Todo};

/// Wholesale persistence of the todo collection
///
/// The collection is the unit of persistence: it is read in full at startup
/// and rewritten in full after every mutation.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Load the whole collection; an absent backing store yields an empty one
    async fn load(&self) -> DomainResult<Vec<Todo>>;

    /// Overwrite the persisted collection
    async fn save(&self, todos: &[Todo]) -> DomainResult<()>;
}
