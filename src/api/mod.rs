//! Task Service API
//!
//! Abstract interface to the remote task store, plus its REST implementation.

mod rest;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::models::{NewTask, Task};

pub use rest::RestTaskApi;

/// Common result type for remote calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Remote call failures
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never got a response (network, CORS, DNS, ...)
    Transport(String),
    /// Server answered with a non-success status
    Status { status: u16, body: String },
    /// Response body was not the JSON we expected
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Request failed: {}", msg),
            ApiError::Status { status, body } => write!(f, "Server returned {}: {}", status, body),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

/// Remote task store.
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait TaskApi {
    /// Fetch every task, undecoded so one bad record cannot sink the list
    async fn list_tasks(&self) -> ApiResult<Vec<Value>>;

    /// Create a task; the server assigns its id
    async fn create_task(&self, task: &NewTask) -> ApiResult<Value>;

    /// Replace a task with the given full body
    async fn update_task(&self, task: &Task) -> ApiResult<()>;
}
