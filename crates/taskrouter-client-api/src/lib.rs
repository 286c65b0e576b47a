//! Request executor contract for TaskRouter clients
//!
//! Clients describe each call as a [`RestRequest`] and hand it to a
//! [`RequestExecutor`]. Executors own transport, authentication and status
//! handling; the helpers here add JSON decoding and callback delivery on top
//! of any executor.

pub mod error;
pub mod request;

pub use error::*;
pub use request::*;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;

#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Account every request of this executor is scoped to
    fn account_sid(&self) -> &str;

    /// Run one request. Only 2xx responses are returned as `Ok`.
    async fn execute(&self, request: RestRequest) -> ExecutorResult<RestResponse>;
}

/// Execute a request and decode its JSON body
pub async fn execute_as<T: DeserializeOwned>(
    executor: &dyn RequestExecutor,
    request: RestRequest,
) -> ExecutorResult<T> {
    executor.execute(request).await?.json()
}

/// Execute a request on a spawned task and hand the raw response to `callback`
///
/// The callback runs exactly once, on the spawned task, whether the call
/// succeeds or fails. Must be called from within a Tokio runtime.
pub fn execute_async<F>(
    executor: Arc<dyn RequestExecutor>,
    request: RestRequest,
    callback: F,
) -> JoinHandle<()>
where
    F: FnOnce(ExecutorResult<RestResponse>) + Send + 'static,
{
    tokio::spawn(async move {
        let result = executor.execute(request).await;
        callback(result);
    })
}

/// Like [`execute_async`], decoding the body into `T` before the callback runs
pub fn execute_as_async<T, F>(
    executor: Arc<dyn RequestExecutor>,
    request: RestRequest,
    callback: F,
) -> JoinHandle<()>
where
    T: DeserializeOwned + Send + 'static,
    F: FnOnce(ExecutorResult<T>) + Send + 'static,
{
    tokio::spawn(async move {
        let result = execute_as::<T>(executor.as_ref(), request).await;
        callback(result);
    })
}
