//! Client Configuration
//!
//! Read from `<script id="todo-config" type="application/json">` in the host
//! page. Every field is optional; missing ones fall back to defaults.

use serde::Deserialize;

use crate::error::ConfigError;

/// Element holding the JSON config
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

/// Element holding the initial todo list
pub const BOOTSTRAP_ELEMENT_ID: &str = "todo-bootstrap";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for API paths, empty for same origin
    pub base_url: String,
    /// Delay before a notice fades out
    pub notice_dismiss_ms: u32,
    /// `log` level name for the console logger
    pub log_level: String,
    pub messages: Messages,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            notice_dismiss_ms: leptos_flash::DEFAULT_DISMISS_MS,
            log_level: "info".to_string(),
            messages: Messages::default(),
        }
    }
}

/// User-visible strings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub empty_content: String,
    pub added: String,
    pub deleted: String,
    pub confirm_delete: String,
    pub request_failed: String,
    pub empty_list: String,
    pub due_label: String,
    pub mark_complete: String,
    pub undo_complete: String,
    pub toggle_important: String,
    pub edit: String,
    pub delete: String,
    pub add_button: String,
    pub content_placeholder: String,
    pub important_label: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            empty_content: "Please enter some content.".to_string(),
            added: "New todo added.".to_string(),
            deleted: "Todo deleted.".to_string(),
            confirm_delete: "Are you sure you want to delete this todo?".to_string(),
            request_failed: "An unknown error occurred.".to_string(),
            empty_list: "Nothing to do. Add a new todo!".to_string(),
            due_label: "Due".to_string(),
            mark_complete: "Mark complete".to_string(),
            undo_complete: "Undo complete".to_string(),
            toggle_important: "Toggle importance".to_string(),
            edit: "Edit".to_string(),
            delete: "Delete".to_string(),
            add_button: "Add".to_string(),
            content_placeholder: "What needs to be done?".to_string(),
            important_label: "Important".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Console log level; unknown names mean `Info`
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Load from the host page; no config element means defaults
    pub fn load() -> Result<Self, ConfigError> {
        match page_json(CONFIG_ELEMENT_ID) {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }
}

/// Text content of a page element, if present
pub fn page_json(element_id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(element_id)?
        .text_content()
}
