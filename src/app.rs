//! Todo Frontend App
//!
//! Main application component: provides the store, kicks off the initial
//! load, and lays out the form, summary and list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpApi;
use crate::components::{NewTodoForm, StatusBar, TodoList};
use crate::store::{store_dispatch, AppState, AppStateStoreFields};
use crate::sync;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    // Load todos on mount
    Effect::new(move |_| {
        spawn_local(async move {
            sync::load_todos(&HttpApi::default(), &store_dispatch(store)).await;
        });
    });

    view! {
        <div class="app-layout">
            <h1>"Todo App"</h1>

            {move || {
                store
                    .error()
                    .get()
                    .map(|message| view! { <div class="error-banner">{message}</div> })
            }}

            <Show
                when=move || !(store.loading().get() && store.items().get().is_empty())
                fallback=|| view! { <div class="loading">"Loading todos..."</div> }
            >
                <NewTodoForm />
                <StatusBar />
                <TodoList />

                <Show when=move || store.items().get().is_empty() && !store.loading().get()>
                    <p class="empty-hint">"No todos yet. Add one above!"</p>
                </Show>
            </Show>
        </div>
    }
}
