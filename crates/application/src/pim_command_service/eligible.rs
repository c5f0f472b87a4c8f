use pimctl_core::AppResult;
use pimctl_domain::{AssignmentState, RoleAssignment};

use crate::CommandOutcome;
use crate::display_records::{EligibleGroup, EligibleRole};

use super::PimCommandService;

impl PimCommandService {
    /// Lists the groups the caller may activate, grouped by group name.
    pub async fn list_eligible(&self) -> AppResult<CommandOutcome<Vec<EligibleGroup>>> {
        let subject = self.directory.signed_in_user_id().await?;
        let assignments = self
            .api
            .list_assignments(&subject, Some(AssignmentState::Eligible))
            .await?;

        let mut outcome = CommandOutcome::new(group_by_name(&assignments));
        if assignments.is_empty() {
            outcome.push_warning("No eligible PIM groups found");
        }

        Ok(outcome)
    }
}

fn group_by_name(assignments: &[RoleAssignment]) -> Vec<EligibleGroup> {
    let mut groups: Vec<EligibleGroup> = Vec::new();

    for assignment in assignments {
        let role = EligibleRole {
            role: assignment.role_name().to_owned(),
            member_type: assignment.member_type_or_unknown().to_owned(),
        };

        match groups
            .iter_mut()
            .find(|group| group.group_name == assignment.group_name())
        {
            Some(group) => {
                if !group.roles.contains(&role) {
                    group.roles.push(role);
                }
            }
            None => groups.push(EligibleGroup {
                group_name: assignment.group_name().to_owned(),
                roles: vec![role],
            }),
        }
    }

    groups
}
