//! HTTP request executor for the TaskRouter REST API
//!
//! Resolves request descriptors against the configured base URL, encodes
//! parameters as query string or form body depending on the method,
//! authenticates with the account credentials and maps error bodies.

pub mod auth;
pub mod config;
pub mod error;
pub mod executor;

pub use auth::*;
pub use config::*;
pub use error::*;
pub use executor::*;

use async_trait::async_trait;
use taskrouter_client_api::{ExecutorResult, RequestExecutor, RestRequest, RestResponse};

#[async_trait]
impl RequestExecutor for executor::HttpExecutor {
    fn account_sid(&self) -> &str {
        executor::HttpExecutor::account_sid(self)
    }

    async fn execute(&self, request: RestRequest) -> ExecutorResult<RestResponse> {
        self.send(&request).await.map_err(Into::into)
    }
}
