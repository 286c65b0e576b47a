//! Workflow management client for the TaskRouter REST API
//!
//! [`WorkflowClient`] turns each workflow operation into a request
//! descriptor and hands it to a [`RequestExecutor`]. Every operation comes in
//! two forms: an `async fn` returning the result, and an `*_async` variant
//! that runs on a spawned task and delivers the result to a callback.
//!
//! ```no_run
//! # async fn run() -> taskrouter_client::ClientResult<()> {
//! use taskrouter_client::{ClientConfig, WorkflowClient, WorkflowFilter};
//!
//! let client = WorkflowClient::from_config(&ClientConfig::from_env()?)?;
//! let page = client
//!     .list_workflows("WS123", Some(&WorkflowFilter::default().page_size(20)))
//!     .await?;
//! for workflow in &page.workflows {
//!     println!("{} {}", workflow.sid, workflow.friendly_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod workflows;

pub use client::*;
pub use error::*;
pub use workflows::*;

pub use taskrouter_api_contract::{
    CreateWorkflowRequest, PageMeta, RestException, UpdateWorkflowRequest, Workflow,
    WorkflowFilter, WorkflowResult,
};
pub use taskrouter_client_api::{RequestExecutor, RestRequest, RestResponse};
pub use taskrouter_rest_client::ClientConfig;
