use pimctl_core::{AppError, AppResult, NonEmptyString};
use pimctl_domain::{ActivationDuration, AssignmentState};

use crate::CommandOutcome;
use crate::display_records::ActivationRecord;

use super::PimCommandService;

/// Arguments of the `request` command.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationRequestInput {
    /// Exact group display name.
    pub name: String,
    /// Justification sent to approvers.
    pub reason: String,
    /// Activation length in hours.
    pub duration_hours: f64,
    /// Role display name, matched ignoring case.
    pub role: String,
}

impl PimCommandService {
    /// Requests activation of one eligible group role.
    ///
    /// Input is validated before any network call. When the provider reports
    /// the role as already active, the outcome succeeds with the provider
    /// message as status and a warning.
    pub async fn request_activation(
        &self,
        input: ActivationRequestInput,
    ) -> AppResult<CommandOutcome<ActivationRecord>> {
        let name = NonEmptyString::new(input.name.as_str())
            .map_err(|_| AppError::Validation("group name must be specified".to_owned()))?;
        let reason = NonEmptyString::new(input.reason.as_str())
            .map_err(|_| AppError::Validation("reason must be specified".to_owned()))?;
        let duration = ActivationDuration::from_hours(input.duration_hours)?;

        let subject = self.directory.signed_in_user_id().await?;
        let eligible = self
            .api
            .list_assignments(&subject, Some(AssignmentState::Eligible))
            .await?;

        let target = eligible
            .iter()
            .find(|assignment| assignment.matches(name.as_str(), input.role.as_str()))
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No eligible group found: {} with role: {}",
                    name.as_str(),
                    input.role
                ))
            })?;
        let resource_id = target.group_resource_id().ok_or_else(|| {
            AppError::MalformedResponse(format!(
                "eligible assignment for {} has no resource id",
                name.as_str()
            ))
        })?;

        let submitted = self
            .api
            .request_activation(
                target.role_definition.id.as_str(),
                resource_id,
                &subject,
                reason.as_str(),
                duration,
            )
            .await;

        let (status, already_active) = match submitted {
            Ok(response) => (
                response
                    .status
                    .map(|status| status.primary_or_unknown())
                    .unwrap_or_else(|| "Unknown".to_owned()),
                false,
            ),
            Err(error) if error.is_already_active() => (error.to_string(), true),
            Err(error) => return Err(error),
        };

        let mut outcome = CommandOutcome::new(ActivationRecord {
            group_name: name.into(),
            role: input.role,
            status,
            reason: reason.into(),
            duration: format!("{} hours", duration.hours()),
        });
        if already_active {
            let message = outcome.records.status.clone();
            outcome.push_warning(message);
        }

        Ok(outcome)
    }
}
