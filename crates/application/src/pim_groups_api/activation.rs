use pimctl_core::{AppError, AppResult, SubjectId};
use pimctl_domain::{ActivationDuration, ActivationSubmission, RoleAssignmentRequest};
use tracing::info;

use crate::pim_api_client::decode;
use crate::pim_ports::HttpMethod;

use super::{PimGroupsApi, ROLE_ASSIGNMENT_REQUESTS};

impl PimGroupsApi {
    /// Submits a self-activation request for one eligible assignment.
    ///
    /// Failures are returned unchanged; an empty response body yields a
    /// request without status.
    pub async fn request_activation(
        &self,
        role_definition_id: &str,
        resource_id: &str,
        subject: &SubjectId,
        reason: &str,
        duration: ActivationDuration,
    ) -> AppResult<RoleAssignmentRequest> {
        let submission =
            ActivationSubmission::new(role_definition_id, resource_id, subject, reason, duration);
        let body = serde_json::to_value(&submission).map_err(|error| {
            AppError::Internal(format!("failed to encode activation request: {error}"))
        })?;

        let url = self.collection_url(ROLE_ASSIGNMENT_REQUESTS);
        let response = self
            .client
            .request(HttpMethod::Post, url.as_str(), Some(body))
            .await?;

        info!(
            resource_id = resource_id,
            role_definition_id = role_definition_id,
            duration = submission.schedule.duration.as_str(),
            "submitted PIM activation request"
        );

        match response {
            Some(body) => decode(body, "activation response"),
            None => Ok(RoleAssignmentRequest::default()),
        }
    }
}
