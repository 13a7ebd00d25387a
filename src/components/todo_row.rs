//! Todo Row Component
//!
//! A single todo in the list: clicking the text toggles completion, the
//! trailing button deletes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;
use crate::models::Todo;
use crate::store::{store_dispatch, use_app_store};
use crate::sync;

/// A single todo row
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let store = use_app_store();
    let id = todo.id;
    let completed = todo.completed;
    let text = todo.text.clone();

    view! {
        <li class=move || if completed { "todo-row completed" } else { "todo-row" }>
            <span
                class="todo-text"
                on:click=move |_| {
                    spawn_local(async move {
                        sync::toggle_todo(&HttpApi::default(), &store_dispatch(store), id).await;
                    });
                }
            >
                {text}
            </span>
            <button
                class="delete-btn"
                on:click=move |_| {
                    spawn_local(async move {
                        sync::delete_todo(&HttpApi::default(), &store_dispatch(store), id).await;
                    });
                }
            >
                "×"
            </button>
        </li>
    }
}
