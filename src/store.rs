//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All state
//! transitions go through [`AppState::apply`], a deterministic function of
//! the current state, an [`Action`] and a timestamp; the reactive store is
//! just the container the UI subscribes to.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Todo;

/// Global application state mirroring the server's todo collection
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// All todos, in server insertion order
    pub items: Vec<Todo>,
    /// A request with a loading phase is in flight
    pub loading: bool,
    /// Last request failure, shown until the next successful load clears it
    pub error: Option<String>,
    /// Epoch millis of the last action that reflected a successful mutation
    pub last_updated: Option<i64>,
}

/// One store transition per outcome the sync controller can dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the whole collection (successful load)
    SetAll(Vec<Todo>),
    /// Append a server-confirmed todo
    AddOne(Todo),
    /// Flip `completed` on the matching todo; no-op when the id is unknown
    ToggleOne(u32),
    /// Remove the matching todo; no-op when the id is unknown
    RemoveOne(u32),
    SetLoading(bool),
    SetError(Option<String>),
    /// Append a locally-built todo carrying a temporary id
    AddTentative(Todo),
    /// Replace a tentative todo in place with the server-confirmed one
    ConfirmAdd { temp_id: u32, todo: Todo },
    /// Roll a tentative todo back out after a failed create
    RevertAdd { temp_id: u32 },
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `action` at time `now`.
    ///
    /// No-op transitions (toggle/remove/confirm of an unknown id) leave the
    /// state exactly as it was, `last_updated` included.
    pub fn apply(&mut self, action: Action, now: i64) {
        match action {
            Action::SetAll(items) => {
                self.items = items;
                self.error = None;
                self.last_updated = Some(now);
            }
            Action::AddOne(todo) | Action::AddTentative(todo) => {
                self.items.push(todo);
                self.last_updated = Some(now);
            }
            Action::ToggleOne(id) => {
                if let Some(todo) = self.items.iter_mut().find(|t| t.id == id) {
                    todo.completed = !todo.completed;
                    self.last_updated = Some(now);
                }
            }
            Action::RemoveOne(id) | Action::RevertAdd { temp_id: id } => {
                let len = self.items.len();
                self.items.retain(|t| t.id != id);
                if self.items.len() != len {
                    self.last_updated = Some(now);
                }
            }
            Action::ConfirmAdd { temp_id, todo } => {
                if let Some(slot) = self.items.iter_mut().find(|t| t.id == temp_id) {
                    *slot = todo;
                    self.last_updated = Some(now);
                }
            }
            Action::SetLoading(loading) => self.loading = loading,
            Action::SetError(error) => self.error = error,
        }
    }

    // Derived views, recomputed on read

    pub fn pending(&self) -> Vec<&Todo> {
        self.items.iter().filter(|t| !t.completed).collect()
    }

    pub fn completed(&self) -> Vec<&Todo> {
        self.items.iter().filter(|t| t.completed).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.completed).count()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Build a dispatch closure that stamps actions with the current time
pub fn store_dispatch(store: AppStore) -> impl Fn(Action) + Clone {
    move |action| store.write().apply(action, now_ms())
}

/// Current time in epoch milliseconds
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: u32, text: &str, completed: bool) -> Todo {
        Todo {
            id,
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert!(state.items.is_empty());
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.last_updated, None);
    }

    #[test]
    fn test_set_all_replaces_items_and_clears_error() {
        let mut state = AppState::new();
        state.apply(Action::SetError(Some("Failed to load todos".into())), 1);
        state.apply(
            Action::SetAll(vec![todo(1, "Test 1", false), todo(2, "Test 2", true)]),
            2,
        );
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.error, None);
        assert_eq!(state.last_updated, Some(2));
    }

    #[test]
    fn test_add_one_appends() {
        let mut state = AppState::new();
        state.apply(Action::AddOne(todo(3, "New Todo", false)), 5);
        assert_eq!(state.items, vec![todo(3, "New Todo", false)]);
        assert_eq!(state.last_updated, Some(5));
    }

    #[test]
    fn test_toggle_one_flips_and_flips_back() {
        let mut state = AppState::new();
        state.apply(Action::AddOne(todo(4, "Toggle Test", false)), 1);

        state.apply(Action::ToggleOne(4), 2);
        assert!(state.items[0].completed);

        state.apply(Action::ToggleOne(4), 3);
        assert!(!state.items[0].completed);
    }

    #[test]
    fn test_toggle_one_unknown_id_is_exact_noop() {
        let mut state = AppState::new();
        state.apply(Action::SetAll(vec![todo(1, "A", false)]), 1);

        let before = state.clone();
        state.apply(Action::ToggleOne(999), 99);
        assert_eq!(state, before);
    }

    #[test]
    fn test_remove_one_filters_out_matching() {
        let mut state = AppState::new();
        state.apply(
            Action::SetAll(vec![todo(5, "Delete Test", false), todo(6, "Keep", false)]),
            1,
        );
        state.apply(Action::RemoveOne(5), 2);
        assert_eq!(state.items, vec![todo(6, "Keep", false)]);
        assert_eq!(state.last_updated, Some(2));
    }

    #[test]
    fn test_remove_one_unknown_id_is_exact_noop() {
        let mut state = AppState::new();
        state.apply(Action::SetAll(vec![todo(1, "A", false)]), 1);

        let before = state.clone();
        state.apply(Action::RemoveOne(999), 99);
        assert_eq!(state, before);
    }

    #[test]
    fn test_loading_and_error_flags_leave_items_alone() {
        let mut state = AppState::new();
        state.apply(Action::SetAll(vec![todo(1, "A", false)]), 1);
        let items = state.items.clone();

        state.apply(Action::SetLoading(true), 2);
        state.apply(Action::SetError(Some("Failed to add todo".into())), 3);
        assert!(state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to add todo"));
        assert_eq!(state.items, items);
        // flags do not count as mutations
        assert_eq!(state.last_updated, Some(1));
    }

    #[test]
    fn test_derived_counts() {
        let mut state = AppState::new();
        state.apply(
            Action::SetAll(vec![
                todo(1, "A", false),
                todo(2, "B", true),
                todo(3, "C", false),
            ]),
            1,
        );
        assert_eq!(state.pending_count(), 2);
        assert_eq!(state.completed_count(), 1);
        assert_eq!(state.pending().len(), 2);
        assert_eq!(state.completed().len(), 1);
    }

    #[test]
    fn test_confirm_add_replaces_tentative_in_place() {
        let mut state = AppState::new();
        state.apply(Action::AddTentative(todo(u32::MAX, "Draft", false)), 1);
        state.apply(Action::AddOne(todo(2, "Later", false)), 2);

        state.apply(
            Action::ConfirmAdd {
                temp_id: u32::MAX,
                todo: todo(7, "Draft", false),
            },
            3,
        );
        // confirmed todo keeps its original position
        assert_eq!(state.items, vec![todo(7, "Draft", false), todo(2, "Later", false)]);
    }

    #[test]
    fn test_revert_add_removes_tentative() {
        let mut state = AppState::new();
        state.apply(Action::AddTentative(todo(u32::MAX, "Draft", false)), 1);
        state.apply(Action::RevertAdd { temp_id: u32::MAX }, 2);
        assert!(state.items.is_empty());
    }
}
