//! New Todo Form Component
//!
//! Input row for creating new todos.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::HttpApi;
use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};
use crate::sync;

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();
    let (text, set_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = text.get();
        if input.trim().is_empty() {
            return;
        }

        spawn_local(async move {
            // the input is only cleared once the server confirms; a failed
            // add keeps it populated so the user can retry
            if sync::add_todo(&HttpApi::default(), &store_dispatch(store), &input).await {
                set_text.set(String::new());
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder="Add a task..."
                prop:value=move || text.get()
                prop:disabled=move || store.loading().get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_text.set(input.value());
                }
            />
            <button
                type="submit"
                prop:disabled=move || store.loading().get() || text.get().trim().is_empty()
            >
                {move || if store.loading().get() { "Adding..." } else { "Add" }}
            </button>
        </form>
    }
}
