//! Todo Service
//!
//! The server-side authority: holds the in-memory todo collection, assigns
//! ids, and forwards every mutation to the persistence collaborator.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{DomainError, DomainResult, Todo};
use crate::repository::CollectionStore;

/// Owns the authoritative todo collection
///
/// Handlers receive this as an injected handle; there is no module-level
/// global. The write lock is held across the persistence rewrite, so each
/// mutation completes fully before the next one is admitted.
pub struct TodoService {
    todos: RwLock<Vec<Todo>>,
    next_id: AtomicU32,
    store: Arc<dyn CollectionStore>,
}

impl TodoService {
    /// Load the persisted collection and seed the id counter past it.
    ///
    /// A failed load is logged and treated as an empty collection.
    pub async fn load(store: Arc<dyn CollectionStore>) -> Self {
        let todos = match store.load().await {
            Ok(todos) => todos,
            Err(e) => {
                tracing::error!("Error loading todos: {e}");
                Vec::new()
            }
        };
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;

        Self {
            todos: RwLock::new(todos),
            next_id: AtomicU32::new(next_id),
            store,
        }
    }

    /// Snapshot of the whole collection, in insertion order
    pub async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    /// Create a todo from `text` and persist the collection
    pub async fn create(&self, text: &str) -> DomainResult<Todo> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::InvalidInput(
                "text must not be empty".to_string(),
            ));
        }

        let mut todos = self.todos.write().await;
        let todo = Todo::new(self.next_id.fetch_add(1, Ordering::Relaxed), text.to_string());
        todos.push(todo.clone());
        self.persist(&todos).await;
        Ok(todo)
    }

    /// Flip completion on the todo with `id` and persist the collection
    pub async fn toggle(&self, id: u32) -> DomainResult<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("todo {} not found", id)))?;
        todo.completed = !todo.completed;
        let updated = todo.clone();
        self.persist(&todos).await;
        Ok(updated)
    }

    /// Remove the todo with `id`; removing an unknown id still succeeds
    pub async fn delete(&self, id: u32) {
        let mut todos = self.todos.write().await;
        todos.retain(|t| t.id != id);
        self.persist(&todos).await;
    }

    /// Best-effort rewrite of the persisted collection.
    ///
    /// A failed write is logged but does not fail the in-memory mutation.
    async fn persist(&self, todos: &[Todo]) {
        if let Err(e) = self.store.save(todos).await {
            tracing::error!("Error saving todos: {e}");
        }
    }
}
