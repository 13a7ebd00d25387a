//! Route configuration for the todo API
//!
//! | Method | Path | Handler | Description |
//! |--------|------|---------|-------------|
//! | GET | /todos | `list_todos` | List the whole collection |
//! | POST | /todos | `create_todo` | Create a todo |
//! | PUT | /todos/:id | `toggle_todo` | Flip completion |
//! | DELETE | /todos/:id | `delete_todo` | Remove a todo |

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use crate::domain::Todo;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub text: String,
}

/// GET /todos - the whole collection; an empty collection is a valid answer
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.service.list().await)
}

/// POST /todos - create a todo from the request text
pub async fn create_todo(
    State(state): State<AppState>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = state.service.create(&request.text).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /todos/:id - flip completion; 404 when the id is unknown
pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.service.toggle(id).await?;
    Ok(Json(todo))
}

/// DELETE /todos/:id - remove a todo; deleting an unknown id still succeeds
pub async fn delete_todo(State(state): State<AppState>, Path(id): Path<u32>) -> StatusCode {
    state.service.delete(id).await;
    StatusCode::NO_CONTENT
}

/// Build the router, with CORS for the browser client and request tracing
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/:id", put(toggle_todo).delete(delete_todo))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
