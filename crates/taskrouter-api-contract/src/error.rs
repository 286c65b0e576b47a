//! Error types for API contract parsing and the service error body

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while parsing contract payloads
#[derive(Debug, Error)]
pub enum ApiContractError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error body returned by the service alongside a non-success status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestException {
    pub code: u32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl std::fmt::Display for RestException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(more_info) = &self.more_info {
            write!(f, " ({})", more_info)?;
        }
        Ok(())
    }
}
