//! Todo Endpoints
//!
//! Typed wrappers for the server's todo routes.

use serde::{Deserialize, Serialize};

use super::{request, Transport};
use crate::error::RequestFailure;
use crate::models::{Todo, TodoId};

// ========================
// Argument Structs
// ========================

#[derive(Debug, Serialize)]
pub struct AddTodoArgs<'a> {
    pub content: &'a str,
    pub due_date: &'a str,
    pub important: bool,
}

// ========================
// Response Payloads
// ========================

#[derive(Deserialize)]
struct AddedPayload {
    todo: Todo,
}

#[derive(Deserialize)]
struct CompletedPayload {
    completed: bool,
}

#[derive(Deserialize)]
struct ImportantPayload {
    important: bool,
}

#[derive(Deserialize)]
struct EmptyPayload {}

// ========================
// Commands
// ========================

pub async fn add_todo<T: Transport + ?Sized>(transport: &T, args: &AddTodoArgs<'_>) -> Result<Todo, RequestFailure> {
    let payload: AddedPayload = request(transport, "/add".to_string(), Some(args)).await?;
    Ok(payload.todo)
}

/// Returns the server's new `completed` value
pub async fn toggle_complete<T: Transport + ?Sized>(transport: &T, id: TodoId) -> Result<bool, RequestFailure> {
    let payload: CompletedPayload = request(transport, format!("/complete/{}", id), None::<&()>).await?;
    Ok(payload.completed)
}

/// Returns the server's new `important` value
pub async fn toggle_important<T: Transport + ?Sized>(transport: &T, id: TodoId) -> Result<bool, RequestFailure> {
    let payload: ImportantPayload = request(transport, format!("/important/{}", id), None::<&()>).await?;
    Ok(payload.important)
}

pub async fn delete_todo<T: Transport + ?Sized>(transport: &T, id: TodoId) -> Result<(), RequestFailure> {
    let _: EmptyPayload = request(transport, format!("/delete/{}", id), None::<&()>).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::ScriptedTransport;

    #[tokio::test]
    async fn test_add_todo_sends_json_body() {
        let transport = ScriptedTransport::new().reply(
            201,
            r#"{"success":true,"todo":{"id":7,"content":"Buy milk","completed":false,"important":false,"due_date":null}}"#,
        );
        let args = AddTodoArgs { content: "Buy milk", due_date: "", important: false };

        let todo = add_todo(&transport, &args).await.unwrap();
        assert_eq!(todo.id, 7);

        let sent = transport.sent.borrow();
        assert_eq!(sent[0].path, "/add");
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"content": "Buy milk", "due_date": "", "important": false}));
    }

    #[tokio::test]
    async fn test_toggle_complete_returns_server_value() {
        let transport = ScriptedTransport::new().reply(200, r#"{"success":true,"completed":false}"#);
        assert!(!toggle_complete(&transport, 4).await.unwrap());
        assert_eq!(transport.sent_paths(), vec!["/complete/4"]);
        assert_eq!(transport.sent.borrow()[0].body, None);
    }

    #[tokio::test]
    async fn test_toggle_important_path() {
        let transport = ScriptedTransport::new().reply(200, r#"{"success":true,"important":true}"#);
        assert!(toggle_important(&transport, 12).await.unwrap());
        assert_eq!(transport.sent_paths(), vec!["/important/12"]);
    }

    #[tokio::test]
    async fn test_delete_todo_requires_success() {
        let transport = ScriptedTransport::new()
            .reply(200, r#"{"success":true}"#)
            .reply(200, r#"{}"#);
        assert!(delete_todo(&transport, 1).await.is_ok());
        assert_eq!(delete_todo(&transport, 1).await, Err(RequestFailure::Rejected { message: None }));
    }

    #[tokio::test]
    async fn test_network_failure_passes_through() {
        let transport = ScriptedTransport::new().fail(RequestFailure::Network("offline".into()));
        assert_eq!(
            toggle_complete(&transport, 2).await,
            Err(RequestFailure::Network("offline".into()))
        );
    }
}
