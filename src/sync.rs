//! Todo Synchronization
//!
//! Each user action makes one server call and touches the list only after a
//! `success: true` reply. Failures become danger notices; nothing is rolled
//! back because nothing was changed ahead of the reply.

use leptos_flash::{FlashLevel, FlashSignals};

use crate::api::{self, AddTodoArgs, Transport};
use crate::config::Messages;
use crate::error::{RequestFailure, SyncError};
use crate::models::{Todo, TodoDraft, TodoId};

/// Where confirmed changes are rendered
pub trait TodoView {
    fn append(&self, todo: Todo);
    fn set_completed(&self, id: TodoId, completed: bool);
    fn set_important(&self, id: TodoId, important: bool);
    fn remove(&self, id: TodoId);
}

/// Where notices are shown
pub trait Notifier {
    fn notify(&self, level: FlashLevel, message: &str);
}

impl Notifier for FlashSignals {
    fn notify(&self, level: FlashLevel, message: &str) {
        self.show(message, level);
    }
}

/// A list action, identified by the anchor's class and `data-id`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoAction {
    Complete(TodoId),
    Important(TodoId),
    Delete(TodoId),
}

impl TodoAction {
    /// Map an anchor's `class` and `data-id` to an action
    pub fn parse(class_list: &str, data_id: Option<&str>) -> Option<Self> {
        let id: TodoId = data_id?.trim().parse().ok()?;
        class_list.split_whitespace().find_map(|class| match class {
            "complete-btn" => Some(TodoAction::Complete(id)),
            "important-btn" => Some(TodoAction::Important(id)),
            "delete-btn" => Some(TodoAction::Delete(id)),
            _ => None,
        })
    }
}

/// Client-side todo operations against one server
#[derive(Debug, Clone)]
pub struct TodoSync<T> {
    transport: T,
    messages: Messages,
}

impl<T: Transport> TodoSync<T> {
    pub fn new(transport: T, messages: Messages) -> Self {
        Self { transport, messages }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    fn report(&self, action: &str, err: RequestFailure, notices: &impl Notifier) -> SyncError {
        log::warn!("[SYNC] {} failed: {}", action, err);
        notices.notify(FlashLevel::Danger, &err.user_message(&self.messages.request_failed));
        SyncError::Request(err)
    }

    /// Create a todo; empty content is rejected without a request
    pub async fn add(
        &self,
        draft: &TodoDraft,
        view: &impl TodoView,
        notices: &impl Notifier,
    ) -> Result<Todo, SyncError> {
        if draft.content.is_empty() {
            notices.notify(FlashLevel::Danger, &self.messages.empty_content);
            return Err(SyncError::EmptyContent);
        }

        let args = AddTodoArgs {
            content: &draft.content,
            due_date: &draft.due_date,
            important: draft.important,
        };
        let todo = api::add_todo(&self.transport, &args)
            .await
            .map_err(|e| self.report("add", e, notices))?;

        log::info!("[SYNC] added todo {}", todo.id);
        view.append(todo.clone());
        notices.notify(FlashLevel::Success, &self.messages.added);
        Ok(todo)
    }

    /// Toggle completion; the row takes the server's value
    pub async fn complete(
        &self,
        id: TodoId,
        view: &impl TodoView,
        notices: &impl Notifier,
    ) -> Result<bool, SyncError> {
        let completed = api::toggle_complete(&self.transport, id)
            .await
            .map_err(|e| self.report("complete", e, notices))?;
        log::debug!("[SYNC] todo {} completed={}", id, completed);
        view.set_completed(id, completed);
        Ok(completed)
    }

    /// Toggle importance; the row takes the server's value
    pub async fn set_important(
        &self,
        id: TodoId,
        view: &impl TodoView,
        notices: &impl Notifier,
    ) -> Result<bool, SyncError> {
        let important = api::toggle_important(&self.transport, id)
            .await
            .map_err(|e| self.report("important", e, notices))?;
        log::debug!("[SYNC] todo {} important={}", id, important);
        view.set_important(id, important);
        Ok(important)
    }

    /// Delete after `confirm` approves the prompt
    pub async fn delete(
        &self,
        id: TodoId,
        confirm: impl FnOnce(&str) -> bool,
        view: &impl TodoView,
        notices: &impl Notifier,
    ) -> Result<(), SyncError> {
        if !confirm(&self.messages.confirm_delete) {
            return Err(SyncError::Cancelled);
        }

        api::delete_todo(&self.transport, id)
            .await
            .map_err(|e| self.report("delete", e, notices))?;
        log::info!("[SYNC] deleted todo {}", id);
        view.remove(id);
        notices.notify(FlashLevel::Info, &self.messages.deleted);
        Ok(())
    }

    /// Run a list action
    pub async fn dispatch(
        &self,
        action: TodoAction,
        confirm: impl FnOnce(&str) -> bool,
        view: &impl TodoView,
        notices: &impl Notifier,
    ) -> Result<(), SyncError> {
        match action {
            TodoAction::Complete(id) => self.complete(id, view, notices).await.map(|_| ()),
            TodoAction::Important(id) => self.set_important(id, view, notices).await.map(|_| ()),
            TodoAction::Delete(id) => self.delete(id, confirm, view, notices).await,
        }
    }
}
