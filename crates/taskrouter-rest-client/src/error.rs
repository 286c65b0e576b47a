//! Error types for the HTTP executor

use reqwest::StatusCode;
use taskrouter_api_contract::RestException;
use taskrouter_client_api::ExecutorError;
use thiserror::Error;

/// Errors that can occur when talking to the TaskRouter API over HTTP
#[derive(Debug, Error)]
pub enum RestClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Missing configuration value: {0}")]
    MissingConfig(&'static str),

    #[error("Server returned error status {status}: {exception:?}")]
    ServerError {
        status: StatusCode,
        exception: Option<RestException>,
    },

    #[error("Request error: {0}")]
    Request(#[from] ExecutorError),
}

impl From<RestClientError> for ExecutorError {
    fn from(error: RestClientError) -> Self {
        match error {
            RestClientError::ServerError { status, exception } => ExecutorError::Server {
                status: status.as_u16(),
                exception,
            },
            RestClientError::Request(inner) => inner,
            RestClientError::Url(e) => ExecutorError::InvalidRequest(e.to_string()),
            RestClientError::Header(e) => ExecutorError::InvalidRequest(e.to_string()),
            RestClientError::Http(e) => ExecutorError::Transport(e.to_string()),
            RestClientError::MissingConfig(name) => {
                ExecutorError::Unexpected(format!("missing configuration value: {}", name))
            }
        }
    }
}

/// Result type alias for HTTP executor operations
pub type RestClientResult<T> = Result<T, RestClientError>;
