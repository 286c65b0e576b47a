//! Request executor that records descriptors instead of sending them

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;
use taskrouter_client_api::{
    ExecutorError, ExecutorResult, RequestExecutor, RestRequest, RestResponse,
};

pub const MOCK_ACCOUNT_SID: &str = "AC00000000000000000000000000000000";

/// Records every request it receives and answers from a queue of canned
/// outcomes, falling back to a default response once the queue is empty.
pub struct RecordingExecutor {
    account_sid: String,
    default_response: RestResponse,
    queued: Mutex<VecDeque<ExecutorResult<RestResponse>>>,
    requests: Mutex<Vec<RestRequest>>,
}

impl Default for RecordingExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingExecutor {
    /// Answers every request with `200 {}`
    pub fn new() -> Self {
        Self {
            account_sid: MOCK_ACCOUNT_SID.to_string(),
            default_response: RestResponse::new(200, "{}"),
            queued: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.account_sid = account_sid.into();
        self
    }

    /// Answer every request with `200` and `body` serialized as JSON
    ///
    /// # Panics
    ///
    /// Panics if `body` cannot be serialized.
    pub fn with_json<T: Serialize>(mut self, body: &T) -> Self {
        let body =
            serde_json::to_string(body).expect("mock response body must serialize to JSON");
        self.default_response = RestResponse::new(200, body);
        self
    }

    pub fn with_response(mut self, response: RestResponse) -> Self {
        self.default_response = response;
        self
    }

    /// Queue a one-off outcome for the next request
    pub fn push_result(&self, result: ExecutorResult<RestResponse>) {
        lock(&self.queued).push_back(result);
    }

    /// Queue a one-off server error for the next request
    pub fn push_server_error(&self, status: u16) {
        self.push_result(Err(ExecutorError::Server {
            status,
            exception: None,
        }));
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<RestRequest> {
        lock(&self.requests).clone()
    }

    pub fn last_request(&self) -> Option<RestRequest> {
        lock(&self.requests).last().cloned()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl RequestExecutor for RecordingExecutor {
    fn account_sid(&self) -> &str {
        &self.account_sid
    }

    async fn execute(&self, request: RestRequest) -> ExecutorResult<RestResponse> {
        lock(&self.requests).push(request);
        // let the caller observe the hand-off before completion
        tokio::task::yield_now().await;

        let queued = lock(&self.queued).pop_front();
        match queued {
            Some(result) => result,
            None => Ok(self.default_response.clone()),
        }
    }
}
