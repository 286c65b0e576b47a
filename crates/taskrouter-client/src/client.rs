//! Client handle shared by all operations

use std::sync::Arc;

use serde::de::DeserializeOwned;
use taskrouter_client_api::{
    execute_as, execute_as_async, execute_async, RequestExecutor, RestRequest, RestResponse,
};
use taskrouter_rest_client::{ClientConfig, HttpExecutor};
use tokio::task::JoinHandle;

use crate::error::{ClientError, ClientResult};

/// Client for the workflow endpoints of one account
///
/// Holds nothing but the executor, so clones are cheap and share it.
#[derive(Clone)]
pub struct WorkflowClient {
    executor: Arc<dyn RequestExecutor>,
}

impl std::fmt::Debug for WorkflowClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowClient")
            .field("account_sid", &self.account_sid())
            .finish()
    }
}

impl WorkflowClient {
    pub fn new(executor: Arc<dyn RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Client talking HTTP with the given account credentials
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let executor = HttpExecutor::new(config)?;
        Ok(Self::new(Arc::new(executor)))
    }

    /// Account all operations are scoped to
    pub fn account_sid(&self) -> &str {
        self.executor.account_sid()
    }

    pub fn executor(&self) -> &Arc<dyn RequestExecutor> {
        &self.executor
    }

    pub(crate) async fn fetch<T: DeserializeOwned>(&self, request: RestRequest) -> ClientResult<T> {
        Ok(execute_as::<T>(self.executor.as_ref(), request).await?)
    }

    pub(crate) async fn fetch_raw(&self, request: RestRequest) -> ClientResult<RestResponse> {
        Ok(self.executor.execute(request).await?)
    }

    /// Run `request` on a spawned task; `callback` receives the decoded body
    /// or the failure, exactly once.
    pub(crate) fn spawn_fetch<T, F>(&self, request: RestRequest, callback: F) -> JoinHandle<()>
    where
        T: DeserializeOwned + Send + 'static,
        F: FnOnce(ClientResult<T>) + Send + 'static,
    {
        execute_as_async::<T, _>(self.executor.clone(), request, move |result| {
            callback(result.map_err(ClientError::from))
        })
    }

    pub(crate) fn spawn_fetch_raw<F>(&self, request: RestRequest, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(ClientResult<RestResponse>) + Send + 'static,
    {
        execute_async(self.executor.clone(), request, move |result| {
            callback(result.map_err(ClientError::from))
        })
    }
}
