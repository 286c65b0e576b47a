//! Workflow operations
//!
//! Each operation is backed by a public request builder so the exact
//! descriptor sent for a set of arguments can be inspected without an
//! executor.

use taskrouter_api_contract::{
    CreateWorkflowRequest, UpdateWorkflowRequest, Workflow, WorkflowFilter, WorkflowResult,
};
use taskrouter_client_api::{RestRequest, RestResponse};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::client::WorkflowClient;
use crate::error::ClientResult;

pub const WORKFLOWS_RESOURCE: &str =
    "Accounts/{AccountSid}/Workspaces/{WorkspaceSid}/Workflows.json";
pub const WORKFLOW_RESOURCE: &str =
    "Accounts/{AccountSid}/Workspaces/{WorkspaceSid}/Workflows/{WorkflowSid}.json";

/// Descriptor for creating a workflow in a workspace
pub fn add_workflow_request(workspace_sid: &str, request: &CreateWorkflowRequest) -> RestRequest {
    RestRequest::post(WORKFLOWS_RESOURCE)
        .url_segment("WorkspaceSid", workspace_sid)
        .parameter("FriendlyName", &request.friendly_name)
        .parameter("Configuration", &request.configuration)
        .parameter("AssignmentCallbackUrl", &request.assignment_callback_url)
        .parameter(
            "FallbackAssignmentCallbackUrl",
            &request.fallback_assignment_callback_url,
        )
        .parameter("TaskReservationTimeout", request.task_reservation_timeout)
}

/// Descriptor for deleting a workflow
pub fn delete_workflow_request(workspace_sid: &str, workflow_sid: &str) -> RestRequest {
    instance_request(RestRequest::delete(WORKFLOW_RESOURCE), workspace_sid, workflow_sid)
}

/// Descriptor for fetching a single workflow
pub fn get_workflow_request(workspace_sid: &str, workflow_sid: &str) -> RestRequest {
    instance_request(RestRequest::get(WORKFLOW_RESOURCE), workspace_sid, workflow_sid)
}

/// Descriptor for listing workflows; only the filters that are set are sent
pub fn list_workflows_request(workspace_sid: &str, filter: Option<&WorkflowFilter>) -> RestRequest {
    let request = RestRequest::get(WORKFLOWS_RESOURCE).url_segment("WorkspaceSid", workspace_sid);

    match filter {
        Some(filter) => request
            .optional_parameter("FriendlyName", filter.friendly_name.as_deref())
            .optional_parameter("AfterSid", filter.after_sid.as_deref())
            .optional_parameter("BeforeSid", filter.before_sid.as_deref())
            .optional_parameter("PageSize", filter.page_size),
        None => request,
    }
}

/// Descriptor for updating a workflow
pub fn update_workflow_request(
    workspace_sid: &str,
    workflow_sid: &str,
    request: &UpdateWorkflowRequest,
) -> RestRequest {
    instance_request(RestRequest::post(WORKFLOW_RESOURCE), workspace_sid, workflow_sid)
        .parameter("FriendlyName", &request.friendly_name)
        .parameter("AssignmentCallbackUrl", &request.assignment_callback_url)
        .parameter(
            "FallbackAssignmentCallbackUrl",
            &request.fallback_assignment_callback_url,
        )
        .parameter("Configuration", &request.configuration)
        .parameter("TaskReservationTimeout", request.task_reservation_timeout)
}

fn instance_request(request: RestRequest, workspace_sid: &str, workflow_sid: &str) -> RestRequest {
    request
        .url_segment("WorkspaceSid", workspace_sid)
        .url_segment("WorkflowSid", workflow_sid)
}

impl WorkflowClient {
    /// Create a workflow in a workspace
    pub async fn add_workflow(
        &self,
        workspace_sid: &str,
        request: &CreateWorkflowRequest,
    ) -> ClientResult<Workflow> {
        debug!(
            "Adding workflow {:?} to workspace {}",
            request.friendly_name, workspace_sid
        );
        self.fetch(add_workflow_request(workspace_sid, request)).await
    }

    /// Create a workflow, delivering the result to `callback`
    pub fn add_workflow_async<F>(
        &self,
        workspace_sid: &str,
        request: &CreateWorkflowRequest,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(ClientResult<Workflow>) + Send + 'static,
    {
        debug!(
            "Adding workflow {:?} to workspace {} in the background",
            request.friendly_name, workspace_sid
        );
        self.spawn_fetch(add_workflow_request(workspace_sid, request), callback)
    }

    /// Delete a workflow; the response carries no body
    pub async fn delete_workflow(
        &self,
        workspace_sid: &str,
        workflow_sid: &str,
    ) -> ClientResult<RestResponse> {
        debug!("Deleting workflow {} in workspace {}", workflow_sid, workspace_sid);
        self.fetch_raw(delete_workflow_request(workspace_sid, workflow_sid)).await
    }

    /// Delete a workflow, delivering the raw response to `callback`
    pub fn delete_workflow_async<F>(
        &self,
        workspace_sid: &str,
        workflow_sid: &str,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(ClientResult<RestResponse>) + Send + 'static,
    {
        debug!(
            "Deleting workflow {} in workspace {} in the background",
            workflow_sid, workspace_sid
        );
        self.spawn_fetch_raw(delete_workflow_request(workspace_sid, workflow_sid), callback)
    }

    /// Fetch a single workflow
    pub async fn get_workflow(
        &self,
        workspace_sid: &str,
        workflow_sid: &str,
    ) -> ClientResult<Workflow> {
        debug!("Fetching workflow {} in workspace {}", workflow_sid, workspace_sid);
        self.fetch(get_workflow_request(workspace_sid, workflow_sid)).await
    }

    pub fn get_workflow_async<F>(
        &self,
        workspace_sid: &str,
        workflow_sid: &str,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(ClientResult<Workflow>) + Send + 'static,
    {
        debug!(
            "Fetching workflow {} in workspace {} in the background",
            workflow_sid, workspace_sid
        );
        self.spawn_fetch(get_workflow_request(workspace_sid, workflow_sid), callback)
    }

    /// List the workflows of a workspace, optionally filtered
    pub async fn list_workflows(
        &self,
        workspace_sid: &str,
        filter: Option<&WorkflowFilter>,
    ) -> ClientResult<WorkflowResult> {
        debug!("Listing workflows in workspace {} ({:?})", workspace_sid, filter);
        self.fetch(list_workflows_request(workspace_sid, filter)).await
    }

    pub fn list_workflows_async<F>(
        &self,
        workspace_sid: &str,
        filter: Option<&WorkflowFilter>,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(ClientResult<WorkflowResult>) + Send + 'static,
    {
        debug!(
            "Listing workflows in workspace {} in the background ({:?})",
            workspace_sid, filter
        );
        self.spawn_fetch(list_workflows_request(workspace_sid, filter), callback)
    }

    /// Replace the settings of an existing workflow
    pub async fn update_workflow(
        &self,
        workspace_sid: &str,
        workflow_sid: &str,
        request: &UpdateWorkflowRequest,
    ) -> ClientResult<Workflow> {
        debug!("Updating workflow {} in workspace {}", workflow_sid, workspace_sid);
        self.fetch(update_workflow_request(workspace_sid, workflow_sid, request))
            .await
    }

    pub fn update_workflow_async<F>(
        &self,
        workspace_sid: &str,
        workflow_sid: &str,
        request: &UpdateWorkflowRequest,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(ClientResult<Workflow>) + Send + 'static,
    {
        debug!(
            "Updating workflow {} in workspace {} in the background",
            workflow_sid, workspace_sid
        );
        self.spawn_fetch(
            update_workflow_request(workspace_sid, workflow_sid, request),
            callback,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskrouter_client_api::{ExecutorError, Method, ParameterKind};

    #[test]
    fn test_sids_are_url_segments() {
        let request = get_workflow_request("WS123", "WF123");

        assert_eq!(request.method(), Method::Get);
        for parameter in request.parameters() {
            assert_eq!(parameter.kind, ParameterKind::UrlSegment);
        }
        assert_eq!(
            request.resolve_path("AC123").unwrap(),
            "Accounts/AC123/Workspaces/WS123/Workflows/WF123.json"
        );
    }

    #[test]
    fn test_update_parameter_order() {
        let update = UpdateWorkflowRequest::new(
            "Support",
            "http://www.example.com/assignment",
            "http://www.example.com/fallback",
            "configuration",
            60,
        );
        let request = update_workflow_request("WS123", "WF123", &update);

        let names: Vec<_> = request.parameters().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "WorkspaceSid",
                "WorkflowSid",
                "FriendlyName",
                "AssignmentCallbackUrl",
                "FallbackAssignmentCallbackUrl",
                "Configuration",
                "TaskReservationTimeout",
            ]
        );
    }

    #[test]
    fn test_list_without_filter_equals_empty_filter() {
        let bare = list_workflows_request("WS123", None);
        let empty = list_workflows_request("WS123", Some(&WorkflowFilter::default()));

        assert_eq!(bare, empty);
        assert_eq!(bare.parameters().len(), 1);
    }

    #[test]
    fn test_arguments_are_sent_as_given() {
        let filter = WorkflowFilter::default().friendly_name("").page_size(5000);
        let request = list_workflows_request("WS_123", Some(&filter));

        assert_eq!(request.parameters().len(), 3);
        assert_eq!(request.find_parameter("FriendlyName").unwrap().value, "");
        assert_eq!(request.find_parameter("PageSize").unwrap().value, 5000i64);
        assert_eq!(
            request.resolve_path("AC123").unwrap(),
            "Accounts/AC123/Workspaces/WS_123/Workflows.json"
        );
    }

    #[test]
    fn test_unplaceable_sid_fails_at_path_resolution() {
        let request = get_workflow_request("WS123", "../WF123");

        assert!(matches!(
            request.resolve_path("AC123"),
            Err(ExecutorError::InvalidRequest(_))
        ));
    }
}
