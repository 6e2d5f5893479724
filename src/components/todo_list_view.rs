//! Todo List Component
//!
//! Renders the rows and the empty placeholder. A single click listener on
//! the list resolves the clicked anchor to a `TodoAction`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::TodoItem;
use crate::context::use_app_context;
use crate::store::{store_rows, store_shows_placeholder};
use crate::sync::TodoAction;

/// Blocking browser confirmation; any failure counts as "no"
fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

/// Action for the nearest anchor around the click target
fn clicked_action(ev: &web_sys::MouseEvent) -> Option<TodoAction> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let anchor = target.closest("a").ok()??;
    TodoAction::parse(&anchor.class_name(), anchor.get_attribute("data-id").as_deref())
}

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_app_context();
    let messages = ctx.messages();
    let empty_label = messages.empty_list.clone();

    let on_click = move |ev: web_sys::MouseEvent| {
        // Anchors without an action (edit link) navigate normally
        let Some(action) = clicked_action(&ev) else { return };
        ev.prevent_default();
        log::debug!("[LIST] {:?}", action);

        let sync = ctx.sync();
        spawn_local(async move {
            let _ = sync.dispatch(action, confirm, &ctx.store, &ctx.flash).await;
        });
    };

    view! {
        <ul id="todo-list" class="list-group" on:click=on_click>
            <For
                each=move || store_rows(&ctx.store)
                key=|row| (row.todo.id, row.todo.completed, row.todo.important, row.highlighted)
                children=move |row| {
                    let edit_href = ctx.edit_href(row.todo.id);
                    view! { <TodoItem row=row messages=messages.clone() edit_href=edit_href /> }
                }
            />
            <Show when=move || store_shows_placeholder(&ctx.store)>
                <li id="empty-todo-msg" class="list-group-item text-center">{empty_label.clone()}</li>
            </Show>
        </ul>
    }
}
