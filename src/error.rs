//! Error Types
//!
//! Every failed server call is a `RequestFailure`; the sync layer turns it
//! into a notice and leaves the list untouched.

use thiserror::Error;

/// A request that did not produce a usable `success: true` response
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestFailure {
    /// fetch itself failed (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx status
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Status { status: u16, message: Option<String> },

    /// 2xx status but `success` missing or false
    #[error("request rejected: {}", .message.as_deref().unwrap_or("<no message>"))]
    Rejected { message: Option<String> },

    /// Body was not the expected JSON
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl RequestFailure {
    /// Message for the user: the server's `error` text when it sent one
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            RequestFailure::Status { message: Some(m), .. }
            | RequestFailure::Rejected { message: Some(m) } => m.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Outcome of a todo action that did not update the list
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyncError {
    #[error("todo content is empty")]
    EmptyContent,

    #[error("cancelled by user")]
    Cancelled,

    #[error(transparent)]
    Request(#[from] RequestFailure),
}

/// Page-embedded configuration could not be read
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid client config: {0}")]
    Parse(#[from] serde_json::Error),
}
