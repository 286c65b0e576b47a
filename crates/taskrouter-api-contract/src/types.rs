//! API contract types for the TaskRouter workflow endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiContractError;

/// Decode `null` the same way as an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A routing configuration that controls how tasks are assigned within a workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workflow {
    #[serde(deserialize_with = "null_as_default")]
    pub sid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_sid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub workspace_sid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub friendly_name: String,
    /// Routing rules as sent to the service; usually a JSON document.
    #[serde(deserialize_with = "null_as_default")]
    pub configuration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_assignment_callback_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub task_reservation_timeout: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Workflow {
    /// Parse the opaque configuration string as JSON.
    pub fn configuration_json(&self) -> Result<serde_json::Value, ApiContractError> {
        Ok(serde_json::from_str(&self.configuration)?)
    }
}

/// Page descriptor attached to list responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    #[serde(deserialize_with = "null_as_default")]
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// One page of workflows returned by the list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowResult {
    #[serde(deserialize_with = "null_as_default")]
    pub workflows: Vec<Workflow>,
    #[serde(deserialize_with = "null_as_default")]
    pub meta: PageMeta,
}

impl WorkflowResult {
    /// Filter that fetches the page after this one.
    ///
    /// Returns `None` when this page is empty or shorter than its page size,
    /// i.e. when there is nothing left to fetch.
    pub fn next_page_filter(&self, current: &WorkflowFilter) -> Option<WorkflowFilter> {
        let last = self.workflows.last()?;
        if self.meta.page_size == 0 || (self.workflows.len() as u32) < self.meta.page_size {
            return None;
        }

        Some(WorkflowFilter {
            after_sid: Some(last.sid.clone()),
            before_sid: None,
            ..current.clone()
        })
    }
}

/// Arguments for creating a workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWorkflowRequest {
    pub friendly_name: String,
    pub configuration: String,
    pub assignment_callback_url: String,
    pub fallback_assignment_callback_url: String,
    pub task_reservation_timeout: u32,
}

impl CreateWorkflowRequest {
    pub fn new(
        friendly_name: impl Into<String>,
        configuration: impl Into<String>,
        assignment_callback_url: impl Into<String>,
        fallback_assignment_callback_url: impl Into<String>,
        task_reservation_timeout: u32,
    ) -> Self {
        Self {
            friendly_name: friendly_name.into(),
            configuration: configuration.into(),
            assignment_callback_url: assignment_callback_url.into(),
            fallback_assignment_callback_url: fallback_assignment_callback_url.into(),
            task_reservation_timeout,
        }
    }
}

/// Arguments for updating an existing workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateWorkflowRequest {
    pub friendly_name: String,
    pub assignment_callback_url: String,
    pub fallback_assignment_callback_url: String,
    pub configuration: String,
    pub task_reservation_timeout: u32,
}

impl UpdateWorkflowRequest {
    pub fn new(
        friendly_name: impl Into<String>,
        assignment_callback_url: impl Into<String>,
        fallback_assignment_callback_url: impl Into<String>,
        configuration: impl Into<String>,
        task_reservation_timeout: u32,
    ) -> Self {
        Self {
            friendly_name: friendly_name.into(),
            assignment_callback_url: assignment_callback_url.into(),
            fallback_assignment_callback_url: fallback_assignment_callback_url.into(),
            configuration: configuration.into(),
            task_reservation_timeout,
        }
    }
}

/// Optional filters for listing workflows; `None` fields are not sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl WorkflowFilter {
    pub fn friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.friendly_name = Some(friendly_name.into());
        self
    }

    pub fn after_sid(mut self, after_sid: impl Into<String>) -> Self {
        self.after_sid = Some(after_sid.into());
        self
    }

    pub fn before_sid(mut self, before_sid: impl Into<String>) -> Self {
        self.before_sid = Some(before_sid.into());
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}
