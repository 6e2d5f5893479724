//! Todo Frontend App
//!
//! Notices, the add form and the todo list.

use leptos::prelude::*;
use leptos_flash::{create_flash_signals, FlashContainer};
use reactive_stores::Store;

use crate::components::{AddTodoForm, TodoListView};
use crate::config::{page_json, ClientConfig, BOOTSTRAP_ELEMENT_ID};
use crate::context::AppContext;
use crate::models::{parse_bootstrap, Todo};
use crate::store::AppState;

/// Initial todos embedded by the server page
pub fn bootstrap_todos() -> Vec<Todo> {
    let Some(json) = page_json(BOOTSTRAP_ELEMENT_ID) else {
        return Vec::new();
    };
    match parse_bootstrap(&json) {
        Ok(todos) => {
            log::info!("[APP] Loaded {} todos from page", todos.len());
            todos
        }
        Err(e) => {
            log::warn!("[APP] Ignoring malformed todo bootstrap: {}", e);
            Vec::new()
        }
    }
}

#[component]
pub fn App(config: ClientConfig, todos: Vec<Todo>) -> impl IntoView {
    let store = Store::new(AppState::new(todos));
    let flash = create_flash_signals(config.notice_dismiss_ms);

    // Provide context to all children
    provide_context(AppContext::new(store, flash, config));

    view! {
        <div class="container my-4">
            <FlashContainer flash=flash />
            <AddTodoForm />
            <TodoListView />
        </div>
    }
}
