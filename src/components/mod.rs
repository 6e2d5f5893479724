//! UI Components
//!
//! Leptos views for the add form and the todo list.

mod add_todo_form;
mod todo_item;
mod todo_list_view;

pub use add_todo_form::AddTodoForm;
pub use todo_item::TodoItem;
pub use todo_list_view::TodoListView;
