//! Add Todo Form Component
//!
//! Content, due date and importance inputs for creating a todo.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::TodoDraft;

/// Form for creating new todos
#[component]
pub fn AddTodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let messages = ctx.messages();

    let (content, set_content) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (important, set_important) = signal(false);

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = TodoDraft::new(
            content.get_untracked(),
            due_date.get_untracked(),
            important.get_untracked(),
        );
        let sync = ctx.sync();

        spawn_local(async move {
            if sync.add(&draft, &ctx.store, &ctx.flash).await.is_ok() {
                // Reset form
                set_content.set(String::new());
                set_due_date.set(String::new());
                set_important.set(false);
            }
        });
    };

    view! {
        <form id="add-todo-form" class="mb-4" on:submit=add_todo>
            <div class="input-group">
                <input
                    type="text"
                    id="content-input"
                    class="form-control"
                    placeholder=messages.content_placeholder.clone()
                    prop:value=move || content.get()
                    on:input=move |ev| set_content.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    id="duedate-input"
                    class="form-control"
                    prop:value=move || due_date.get()
                    on:input=move |ev| set_due_date.set(event_target_value(&ev))
                />
                <div class="input-group-text">
                    <input
                        type="checkbox"
                        id="important-input"
                        class="form-check-input mt-0"
                        prop:checked=move || important.get()
                        on:change=move |ev| set_important.set(event_target_checked(&ev))
                    />
                    <label for="important-input" class="ms-1">{messages.important_label.clone()}</label>
                </div>
                <button type="submit" class="btn btn-primary">{messages.add_button.clone()}</button>
            </div>
        </form>
    }
}
