//! Errors reported by request executors

use taskrouter_api_contract::RestException;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("server returned status {status}: {}", describe_exception(.exception))]
    Server {
        status: u16,
        exception: Option<RestException>,
    },

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl ExecutorError {
    /// HTTP status of a server-side failure
    pub fn status(&self) -> Option<u16> {
        match self {
            ExecutorError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn describe_exception(exception: &Option<RestException>) -> String {
    match exception {
        Some(exception) => exception.to_string(),
        None => "no error details".to_string(),
    }
}

pub type ExecutorResult<T> = Result<T, ExecutorError>;
