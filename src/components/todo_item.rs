//! Todo Item Component
//!
//! A single `<li>` row. Action anchors carry `data-id` and an action class;
//! clicks are handled by the list.

use leptos::prelude::*;

use crate::config::Messages;
use crate::store::TodoRow;

#[component]
pub fn TodoItem(row: TodoRow, messages: Messages, edit_href: String) -> impl IntoView {
    let id = row.todo.id.to_string();
    let due_label = row
        .visible_due_date()
        .map(|date| format!("({}: {})", messages.due_label, date));
    let complete_title = if row.todo.completed {
        messages.undo_complete.clone()
    } else {
        messages.mark_complete.clone()
    };

    view! {
        <li id=row.dom_id() class=row.row_class()>
            <div>
                <a
                    href="#"
                    class="text-decoration-none me-2 important-btn"
                    data-id=id.clone()
                    title=messages.toggle_important.clone()
                >
                    <i class=row.star_class()></i>
                </a>
                <span class="todo-content" style=row.content_style()>
                    {row.todo.content.clone()}
                </span>
                {due_label.map(|label| view! { <small class="ms-2 due-date text-muted">{label}</small> })}
            </div>
            <div class="d-flex gap-2">
                <a href="#" class=row.complete_button_class() data-id=id.clone() title=complete_title>
                    <i class="fa-solid fa-check"></i>
                </a>
                <a href=edit_href class="btn btn-sm btn-warning" title=messages.edit.clone()>
                    <i class="fa-solid fa-pen"></i>
                </a>
                <a href="#" class="btn btn-sm btn-danger delete-btn" data-id=id title=messages.delete.clone()>
                    <i class="fa-solid fa-trash"></i>
                </a>
            </div>
        </li>
    }
}
