//! API Layer
//!
//! HTTP surface of the task service.

mod error;
mod routes;

pub use error::{ApiError, ErrorBody};
pub use routes::{create_router, CreateTodoRequest};
