//! Global Application State Store
//!
//! The rendered list is a typed view-model: one `TodoRow` per todo id, in
//! display order. Leptos reactive_stores wraps it for fine-grained updates.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Todo, TodoId};
use crate::sync::TodoView;

/// A rendered todo and its highlight state
#[derive(Debug, Clone, PartialEq)]
pub struct TodoRow {
    pub todo: Todo,
    /// Warning background; set on add and on importance changes only
    pub highlighted: bool,
}

impl TodoRow {
    pub fn new(todo: Todo) -> Self {
        let highlighted = todo.important && !todo.completed;
        Self { todo, highlighted }
    }

    pub fn dom_id(&self) -> String {
        format!("todo-{}", self.todo.id)
    }

    pub fn row_class(&self) -> &'static str {
        if self.highlighted {
            "list-group-item d-flex justify-content-between align-items-center bg-warning-subtle"
        } else {
            "list-group-item d-flex justify-content-between align-items-center"
        }
    }

    pub fn content_style(&self) -> &'static str {
        if self.todo.completed {
            "text-decoration: line-through; color: #6c757d;"
        } else {
            ""
        }
    }

    pub fn star_class(&self) -> &'static str {
        if self.todo.important {
            "fa-solid fa-star text-warning"
        } else {
            "fa-regular fa-star text-muted"
        }
    }

    pub fn complete_button_class(&self) -> &'static str {
        if self.todo.completed {
            "btn btn-sm btn-secondary complete-btn"
        } else {
            "btn btn-sm btn-success complete-btn"
        }
    }

    /// Due date, hidden once the todo is completed
    pub fn visible_due_date(&self) -> Option<&str> {
        match &self.todo.due_date {
            Some(date) if !date.is_empty() && !self.todo.completed => Some(date.as_str()),
            _ => None,
        }
    }
}

/// Rows in display order, unique by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    rows: Vec<TodoRow>,
}

impl TodoList {
    pub fn from_todos(todos: impl IntoIterator<Item = Todo>) -> Self {
        let mut list = Self::default();
        for todo in todos {
            list.insert(todo);
        }
        list
    }

    pub fn rows(&self) -> &[TodoRow] {
        &self.rows
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoRow> {
        self.rows.iter().find(|row| row.todo.id == id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The "no todos" placeholder is shown exactly when this is true
    pub fn shows_placeholder(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row, replacing any existing row with the same id in place
    pub fn insert(&mut self, todo: Todo) {
        let row = TodoRow::new(todo);
        match self.rows.iter_mut().find(|r| r.todo.id == row.todo.id) {
            Some(existing) => *existing = row,
            None => self.rows.push(row),
        }
    }

    pub fn set_completed(&mut self, id: TodoId, completed: bool) -> bool {
        self.rows
            .iter_mut()
            .find(|r| r.todo.id == id)
            .map(|r| r.todo.completed = completed)
            .is_some()
    }

    pub fn set_important(&mut self, id: TodoId, important: bool) -> bool {
        self.rows
            .iter_mut()
            .find(|r| r.todo.id == id)
            .map(|r| {
                r.todo.important = important;
                r.highlighted = important;
            })
            .is_some()
    }

    pub fn remove(&mut self, id: TodoId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.todo.id != id);
        self.rows.len() != before
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Rendered todo rows
    pub todos: TodoList,
}

impl AppState {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos: TodoList::from_todos(todos),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Rows snapshot for rendering (tracked)
pub fn store_rows(store: &AppStore) -> Vec<TodoRow> {
    store.todos().read().rows().to_vec()
}

/// Whether the placeholder should render (tracked)
pub fn store_shows_placeholder(store: &AppStore) -> bool {
    store.todos().read().shows_placeholder()
}

impl TodoView for AppStore {
    fn append(&self, todo: Todo) {
        self.todos().write().insert(todo);
    }

    fn set_completed(&self, id: TodoId, completed: bool) {
        if !self.todos().write().set_completed(id, completed) {
            log::warn!("[STORE] complete: no row for todo {}", id);
        }
    }

    fn set_important(&self, id: TodoId, important: bool) {
        if !self.todos().write().set_important(id, important) {
            log::warn!("[STORE] important: no row for todo {}", id);
        }
    }

    fn remove(&self, id: TodoId) {
        self.todos().write().remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: TodoId, completed: bool, important: bool, due: Option<&str>) -> Todo {
        Todo {
            id,
            content: format!("Todo {}", id),
            completed,
            important,
            due_date: due.map(str::to_string),
        }
    }

    #[test]
    fn test_new_row_unstyled() {
        let row = TodoRow::new(make_todo(7, false, false, None));
        assert_eq!(row.dom_id(), "todo-7");
        assert!(!row.highlighted);
        assert_eq!(row.content_style(), "");
        assert!(!row.row_class().contains("bg-warning-subtle"));
        assert_eq!(row.star_class(), "fa-regular fa-star text-muted");
        assert_eq!(row.complete_button_class(), "btn btn-sm btn-success complete-btn");
    }

    #[test]
    fn test_highlight_only_when_important_and_open() {
        assert!(TodoRow::new(make_todo(1, false, true, None)).highlighted);
        assert!(!TodoRow::new(make_todo(2, true, true, None)).highlighted);
    }

    #[test]
    fn test_completed_row_style() {
        let row = TodoRow::new(make_todo(3, true, false, Some("2026-12-01")));
        assert_eq!(row.content_style(), "text-decoration: line-through; color: #6c757d;");
        assert_eq!(row.complete_button_class(), "btn btn-sm btn-secondary complete-btn");
        assert_eq!(row.visible_due_date(), None);
    }

    #[test]
    fn test_due_date_visibility_follows_completion() {
        let mut list = TodoList::from_todos(vec![make_todo(1, false, false, Some("2026-12-01"))]);
        assert_eq!(list.get(1).unwrap().visible_due_date(), Some("2026-12-01"));

        list.set_completed(1, true);
        assert_eq!(list.get(1).unwrap().visible_due_date(), None);

        list.set_completed(1, false);
        assert_eq!(list.get(1).unwrap().visible_due_date(), Some("2026-12-01"));
    }

    #[test]
    fn test_empty_due_date_hidden() {
        let row = TodoRow::new(make_todo(1, false, false, Some("")));
        assert_eq!(row.visible_due_date(), None);
    }

    #[test]
    fn test_insert_keeps_one_row_per_id() {
        let mut list = TodoList::default();
        list.insert(make_todo(1, false, false, None));
        list.insert(make_todo(2, false, false, None));
        list.insert(Todo { content: "renamed".into(), ..make_todo(1, false, false, None) });

        assert_eq!(list.len(), 2);
        assert_eq!(list.rows()[0].todo.content, "renamed");
        assert_eq!(list.rows()[1].todo.id, 2);
    }

    #[test]
    fn test_set_important_drives_highlight() {
        let mut list = TodoList::from_todos(vec![make_todo(1, true, false, None)]);
        assert!(list.set_important(1, true));
        assert!(list.get(1).unwrap().highlighted);

        assert!(list.set_important(1, false));
        assert!(!list.get(1).unwrap().highlighted);
    }

    #[test]
    fn test_complete_leaves_highlight() {
        let mut list = TodoList::from_todos(vec![make_todo(1, false, true, None)]);
        list.set_completed(1, true);
        assert!(list.get(1).unwrap().highlighted);
    }

    #[test]
    fn test_unknown_id_updates_nothing() {
        let mut list = TodoList::from_todos(vec![make_todo(1, false, false, None)]);
        let before = list.clone();
        assert!(!list.set_completed(9, true));
        assert!(!list.set_important(9, true));
        assert!(!list.remove(9));
        assert_eq!(list, before);
    }

    #[test]
    fn test_placeholder_when_empty() {
        let mut list = TodoList::default();
        assert!(list.shows_placeholder());

        list.insert(make_todo(1, false, false, None));
        assert!(!list.shows_placeholder());

        list.remove(1);
        assert!(list.shows_placeholder());
    }

    #[test]
    fn test_from_todos_dedups() {
        let list = TodoList::from_todos(vec![
            make_todo(1, false, false, None),
            make_todo(1, true, false, None),
        ]);
        assert_eq!(list.len(), 1);
        assert!(list.get(1).unwrap().todo.completed);
    }
}
