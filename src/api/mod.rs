//! Server API
//!
//! Requests are plain data handed to a `Transport`; responses come back as
//! plain data and are interpreted here. The browser transport lives in
//! `fetch`, endpoint wrappers in `todo`.

mod fetch;
mod todo;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::RequestFailure;

pub use fetch::FetchTransport;
pub use todo::*;

/// An outgoing API call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: &'static str,
    pub path: String,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Option<String>,
}

/// A completed HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes `ApiRequest`s. `Err` only for transport-level failures.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestFailure>;
}

const JSON_HEADERS: [(&str, &str); 2] = [
    ("Content-Type", "application/json"),
    ("Accept", "application/json"),
];

/// Build a JSON POST; the body is only attached when a payload is given
pub fn build_post<B: Serialize>(path: String, payload: Option<&B>) -> Result<ApiRequest, RequestFailure> {
    let body = payload
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| RequestFailure::Malformed(format!("encode request: {}", e)))?;
    Ok(ApiRequest {
        method: "POST",
        path,
        headers: JSON_HEADERS.to_vec(),
        body,
    })
}

/// Turn a response into `R`, or the failure it represents
///
/// Non-2xx and `success` other than `true` are failures; the `error` field is
/// carried along when the body has one.
pub fn interpret<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, RequestFailure> {
    let parsed: Result<Value, _> = serde_json::from_str(&response.body);
    let error_text = parsed
        .as_ref()
        .ok()
        .and_then(|v| v.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string);

    if !response.is_ok() {
        return Err(RequestFailure::Status {
            status: response.status,
            message: error_text,
        });
    }

    let value = parsed.map_err(|e| RequestFailure::Malformed(e.to_string()))?;
    if value.get("success").and_then(Value::as_bool) != Some(true) {
        return Err(RequestFailure::Rejected { message: error_text });
    }

    serde_json::from_value(value).map_err(|e| RequestFailure::Malformed(e.to_string()))
}

/// Send a POST and interpret the reply
pub async fn request<T, B, R>(transport: &T, path: String, payload: Option<&B>) -> Result<R, RequestFailure>
where
    T: Transport + ?Sized,
    B: Serialize,
    R: DeserializeOwned,
{
    let request = build_post(path, payload)?;
    log::debug!("[API] {} {}", request.method, request.path);
    let response = transport.send(request).await?;
    interpret(&response)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Replays canned responses and records what was sent
    #[derive(Default)]
    pub struct ScriptedTransport {
        replies: RefCell<VecDeque<Result<ApiResponse, RequestFailure>>>,
        pub sent: RefCell<Vec<ApiRequest>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(self, status: u16, body: &str) -> Self {
            self.replies.borrow_mut().push_back(Ok(ApiResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(self, err: RequestFailure) -> Self {
            self.replies.borrow_mut().push_back(Err(err));
            self
        }

        pub fn sent_paths(&self) -> Vec<String> {
            self.sent.borrow().iter().map(|r| r.path.clone()).collect()
        }
    }

    #[async_trait(?Send)]
    impl Transport for ScriptedTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestFailure> {
            self.sent.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(RequestFailure::Network("no scripted reply".into())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Flag {
        completed: bool,
    }

    fn resp(status: u16, body: &str) -> ApiResponse {
        ApiResponse { status, body: body.to_string() }
    }

    #[test]
    fn test_build_post_headers_and_body() {
        let req = build_post("/add".into(), Some(&serde_json::json!({"content": "x"}))).unwrap();
        assert_eq!(req.method, "POST");
        assert_eq!(req.body.as_deref(), Some(r#"{"content":"x"}"#));
        assert!(req.headers.contains(&("Content-Type", "application/json")));
        assert!(req.headers.contains(&("Accept", "application/json")));
    }

    #[test]
    fn test_build_post_without_payload_has_no_body() {
        let req = build_post::<()>("/delete/1".into(), None).unwrap();
        assert_eq!(req.body, None);
        assert_eq!(req.headers.len(), 2);
    }

    #[test]
    fn test_interpret_success() {
        let flag: Flag = interpret(&resp(200, r#"{"success":true,"completed":true}"#)).unwrap();
        assert_eq!(flag, Flag { completed: true });
    }

    #[test]
    fn test_interpret_status_with_error_text() {
        let err = interpret::<Flag>(&resp(403, r#"{"success":false,"error":"Permission denied."}"#)).unwrap_err();
        assert_eq!(err, RequestFailure::Status { status: 403, message: Some("Permission denied.".into()) });
    }

    #[test]
    fn test_interpret_status_with_html_body() {
        let err = interpret::<Flag>(&resp(404, "<html>Not Found</html>")).unwrap_err();
        assert_eq!(err, RequestFailure::Status { status: 404, message: None });
    }

    #[test]
    fn test_interpret_ok_but_not_success() {
        let err = interpret::<Flag>(&resp(200, r#"{"completed":true}"#)).unwrap_err();
        assert_eq!(err, RequestFailure::Rejected { message: None });

        let err = interpret::<Flag>(&resp(200, r#"{"success":false,"error":"busy"}"#)).unwrap_err();
        assert_eq!(err, RequestFailure::Rejected { message: Some("busy".into()) });
    }

    #[test]
    fn test_interpret_ok_with_garbage() {
        let err = interpret::<Flag>(&resp(200, "oops")).unwrap_err();
        assert!(matches!(err, RequestFailure::Malformed(_)));
    }

    #[test]
    fn test_interpret_missing_payload_field() {
        let err = interpret::<Flag>(&resp(200, r#"{"success":true}"#)).unwrap_err();
        assert!(matches!(err, RequestFailure::Malformed(_)));
    }
}
