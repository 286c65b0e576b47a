//! Error type of the workflow client

use taskrouter_client_api::ExecutorError;
use taskrouter_rest_client::RestClientError;
use thiserror::Error;

/// Every failure of an operation is reported by the request executor
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Executor(#[from] ExecutorError),
}

impl From<RestClientError> for ClientError {
    fn from(error: RestClientError) -> Self {
        ClientError::Executor(error.into())
    }
}

impl ClientError {
    /// HTTP status of a server-side failure
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Executor(error) => error.status(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
