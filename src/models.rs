//! Frontend Models
//!
//! Data structures matching the server's todo records.

use serde::{Deserialize, Serialize};

/// Server-assigned todo identifier
pub type TodoId = u32;

/// Todo record as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub content: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub important: bool,
    /// `YYYY-MM-DD`, absent when the todo has no deadline
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Values collected from the add form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoDraft {
    pub content: String,
    /// Empty when no date was picked
    pub due_date: String,
    pub important: bool,
}

impl TodoDraft {
    pub fn new(content: impl Into<String>, due_date: impl Into<String>, important: bool) -> Self {
        Self {
            content: content.into(),
            due_date: due_date.into(),
            important,
        }
    }
}

/// Parse the todo list embedded in the host page
pub fn parse_bootstrap(json: &str) -> Result<Vec<Todo>, serde_json::Error> {
    serde_json::from_str(json)
}
