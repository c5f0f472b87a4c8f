use chrono::Utc;
use pimctl_core::AppResult;
use pimctl_domain::{AssignmentState, format_datetime, format_time_remaining};

use crate::CommandOutcome;
use crate::display_records::ActiveAssignmentRecord;

use super::PimCommandService;

impl PimCommandService {
    /// Lists the caller's active elevations with expiry countdowns.
    pub async fn list_active(&self) -> AppResult<CommandOutcome<Vec<ActiveAssignmentRecord>>> {
        let subject = self.directory.signed_in_user_id().await?;
        let assignments = self
            .api
            .list_assignments(&subject, Some(AssignmentState::Active))
            .await?;

        let now = Utc::now();
        let records = assignments
            .iter()
            .map(|assignment| {
                let end = assignment.end_date_time.as_deref();
                ActiveAssignmentRecord {
                    group_name: assignment.group_name().to_owned(),
                    role: assignment.role_name().to_owned(),
                    member_type: assignment.member_type_or_unknown().to_owned(),
                    expires: format_datetime(end),
                    time_remaining: format_time_remaining(end, now),
                    status: assignment
                        .status
                        .as_ref()
                        .map(|status| status.primary_or_unknown())
                        .unwrap_or_else(|| "Unknown".to_owned()),
                }
            })
            .collect();

        let mut outcome = CommandOutcome::new(records);
        if assignments.is_empty() {
            outcome.push_warning("No active groups found");
        }

        Ok(outcome)
    }
}
