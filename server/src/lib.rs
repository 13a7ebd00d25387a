//! Todo Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Persistence abstractions and implementations
//! - service: The in-memory authoritative collection
//! - api: HTTP surface

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod domain;
pub mod repository;
pub mod service;

use service::TodoService;

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TodoService>,
}
