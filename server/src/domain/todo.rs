//! Todo Entity
//!
//! The unit of work tracked by the system.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A single todo item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, assigned by the service at creation time
    pub id: u32,
    /// Todo text content
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Todo {
    /// Create a new, not yet completed todo
    pub fn new(id: u32, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

impl Entity for Todo {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
