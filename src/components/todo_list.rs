//! Todo List Component
//!
//! Renders one row per todo, in server insertion order.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use super::TodoRow;

/// The todo collection as a list
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="todo-list">
            {move || {
                store
                    .items()
                    .get()
                    .into_iter()
                    .map(|todo| view! { <TodoRow todo=todo /> })
                    .collect_view()
            }}
        </ul>
    }
}
