use pimctl_core::{AppError, AppResult};
use pimctl_domain::{RoleAssignmentRequest, format_datetime};

use crate::display_records::PendingRequestRecord;
use crate::{CommandOutcome, PENDING_APPROVAL};

use super::PimCommandService;

impl PimCommandService {
    /// Lists the caller's requests awaiting approval.
    pub async fn list_pending(&self) -> AppResult<CommandOutcome<Vec<PendingRequestRecord>>> {
        let subject = self.directory.signed_in_user_id().await?;
        let requests = self
            .api
            .list_assignment_requests(&subject, Some(PENDING_APPROVAL))
            .await?;

        let records = requests
            .iter()
            .map(pending_record)
            .collect::<AppResult<Vec<_>>>()?;

        let mut outcome = CommandOutcome::new(records);
        if requests.is_empty() {
            outcome.push_warning("No pending requests found");
        }

        Ok(outcome)
    }
}

fn pending_record(request: &RoleAssignmentRequest) -> AppResult<PendingRequestRecord> {
    let group_name = request
        .resource
        .as_ref()
        .map(|resource| resource.display_name.clone())
        .ok_or_else(|| {
            AppError::MalformedResponse(
                "role assignment request is missing its expanded resource".to_owned(),
            )
        })?;
    let role = request
        .role_definition
        .as_ref()
        .map(|role_definition| role_definition.display_name.clone())
        .ok_or_else(|| {
            AppError::MalformedResponse(
                "role assignment request is missing its expanded role definition".to_owned(),
            )
        })?;

    Ok(PendingRequestRecord {
        group_name,
        role,
        requested_at: format_datetime(request.requested_date_time.as_deref()),
        status: request
            .status
            .as_ref()
            .map(|status| status.combined())
            .unwrap_or_default(),
    })
}
