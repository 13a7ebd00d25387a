//! Status Bar Component
//!
//! Pending/completed summary derived from the store.

use leptos::prelude::*;

use crate::store::use_app_store;

/// Count summary under the input row
#[component]
pub fn StatusBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <p class="todo-count">
            {move || {
                let state = store.get();
                format!("{} pending, {} completed", state.pending_count(), state.completed_count())
            }}
        </p>
    }
}
