//! Sync Controller
//!
//! Translates user intent into API requests and store actions. Each
//! user-facing operation is a request/response pair whose outcomes map onto
//! [`Action`]s; request failures of any kind collapse into one fixed
//! user-facing message per operation and never propagate further.

use std::cell::Cell;

use crate::api::TodoApi;
use crate::models::Todo;
use crate::store::Action;

pub const FAILED_LOAD: &str = "Failed to load todos";
pub const FAILED_ADD: &str = "Failed to add todo";
pub const FAILED_UPDATE: &str = "Failed to update todo";
pub const FAILED_DELETE: &str = "Failed to delete todo";

thread_local! {
    /// Temporary ids for optimistic adds count down from the top of the id
    /// space; server ids count up from 1, so the two never collide.
    static NEXT_TEMP_ID: Cell<u32> = const { Cell::new(u32::MAX) };
}

fn next_temp_id() -> u32 {
    NEXT_TEMP_ID.with(|cell| {
        let id = cell.get();
        cell.set(id - 1);
        id
    })
}

fn log_error(context: &str, err: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&format!("{context}: {err}").into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{context}: {err}");
}

/// Fetch the whole collection and replace the store's mirror of it.
///
/// On failure the items are left untouched and the error flag is set.
pub async fn load_todos(api: &impl TodoApi, dispatch: &impl Fn(Action)) {
    dispatch(Action::SetLoading(true));
    dispatch(Action::SetError(None));
    match api.list_todos().await {
        Ok(todos) => dispatch(Action::SetAll(todos)),
        Err(err) => {
            log_error("Error fetching todos", &err);
            dispatch(Action::SetError(Some(FAILED_LOAD.to_string())));
        }
    }
    dispatch(Action::SetLoading(false));
}

/// Create a todo from the input text.
///
/// Returns `true` when the todo was created (the caller clears the input)
/// and `false` otherwise (the caller keeps the input so the user can retry).
/// Empty or whitespace-only input issues no request and changes no state.
pub async fn add_todo(api: &impl TodoApi, dispatch: &impl Fn(Action), text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }

    dispatch(Action::SetLoading(true));
    let created = match api.create_todo(text).await {
        Ok(todo) => {
            dispatch(Action::AddOne(todo));
            true
        }
        Err(err) => {
            log_error("Error adding todo", &err);
            dispatch(Action::SetError(Some(FAILED_ADD.to_string())));
            false
        }
    };
    dispatch(Action::SetLoading(false));
    created
}

/// Flip completion on the server, then mirror the flip locally.
///
/// Fire-and-forget: no loading flag, so the UI stays responsive.
pub async fn toggle_todo(api: &impl TodoApi, dispatch: &impl Fn(Action), id: u32) {
    match api.toggle_todo(id).await {
        Ok(_) => dispatch(Action::ToggleOne(id)),
        Err(err) => {
            log_error("Error updating todo", &err);
            dispatch(Action::SetError(Some(FAILED_UPDATE.to_string())));
        }
    }
}

/// Delete on the server, then remove from the store.
pub async fn delete_todo(api: &impl TodoApi, dispatch: &impl Fn(Action), id: u32) {
    match api.delete_todo(id).await {
        Ok(()) => dispatch(Action::RemoveOne(id)),
        Err(err) => {
            log_error("Error deleting todo", &err);
            dispatch(Action::SetError(Some(FAILED_DELETE.to_string())));
        }
    }
}

/// Optimistic variant of [`add_todo`]: the todo appears immediately under a
/// temporary id and is confirmed or rolled back when the server answers.
pub async fn add_todo_optimistic(api: &impl TodoApi, dispatch: &impl Fn(Action), text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }

    let temp_id = next_temp_id();
    dispatch(Action::AddTentative(Todo {
        id: temp_id,
        text: text.to_string(),
        completed: false,
    }));

    match api.create_todo(text).await {
        Ok(todo) => {
            dispatch(Action::ConfirmAdd { temp_id, todo });
            true
        }
        Err(err) => {
            log_error("Error adding todo", &err);
            dispatch(Action::RevertAdd { temp_id });
            dispatch(Action::SetError(Some(FAILED_ADD.to_string())));
            false
        }
    }
}

/// Optimistic variant of [`toggle_todo`]: flip locally first, flip back on
/// failure (toggling is its own inverse).
pub async fn toggle_todo_optimistic(api: &impl TodoApi, dispatch: &impl Fn(Action), id: u32) {
    dispatch(Action::ToggleOne(id));
    if let Err(err) = api.toggle_todo(id).await {
        log_error("Error updating todo", &err);
        dispatch(Action::ToggleOne(id));
        dispatch(Action::SetError(Some(FAILED_UPDATE.to_string())));
    }
}
