use pimctl_core::{AppError, AppResult, SubjectId};
use serde::Serialize;

use crate::AssignmentState;

/// Encodes fractional hours as an ISO-8601 minutes duration.
///
/// Minutes are truncated, so `0.5` becomes `PT30M` and `1.0101` becomes
/// `PT60M`.
#[must_use]
pub fn encode_duration(hours: f64) -> String {
    format!("PT{}M", (hours * 60.0).trunc() as i64)
}

/// Validated activation length in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationDuration(f64);

impl ActivationDuration {
    /// Creates a duration from a strictly positive, finite number of hours.
    pub fn from_hours(hours: f64) -> AppResult<Self> {
        if !hours.is_finite() {
            return Err(AppError::Validation(
                "duration must be a finite number of hours".to_owned(),
            ));
        }

        if hours <= 0.0 {
            return Err(AppError::Validation(
                "duration must be greater than zero".to_owned(),
            ));
        }

        Ok(Self(hours))
    }

    /// Returns the requested hours.
    #[must_use]
    pub fn hours(&self) -> f64 {
        self.0
    }

    /// Returns the ISO-8601 encoding sent to the provider.
    #[must_use]
    pub fn to_iso8601(&self) -> String {
        encode_duration(self.0)
    }
}

/// Request type of an activation submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequestType {
    /// The subject asks to add an assignment for themselves.
    UserAdd,
}

/// Schedule type of an activation submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScheduleType {
    /// A single activation window starting now.
    Once,
}

/// Schedule sub-object of an activation submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationSchedule {
    /// Always `Once`.
    #[serde(rename = "type")]
    pub schedule_type: ScheduleType,
    /// Left null so the provider starts the window immediately.
    pub start_date_time: Option<String>,
    /// Left null; the window is bounded by `duration`.
    pub end_date_time: Option<String>,
    /// ISO-8601 duration, minutes resolution.
    pub duration: String,
}

/// Outbound payload asking the provider to activate an eligible assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationSubmission {
    /// Role definition of the eligible assignment.
    pub role_definition_id: String,
    /// Group resource of the eligible assignment.
    pub resource_id: String,
    /// Subject requesting activation.
    pub subject_id: String,
    /// Always `Active`.
    pub assignment_state: AssignmentState,
    /// Always `UserAdd`.
    #[serde(rename = "type")]
    pub request_type: RequestType,
    /// Free-text justification.
    pub reason: String,
    /// Activation window.
    pub schedule: ActivationSchedule,
}

impl ActivationSubmission {
    /// Builds a self-activation payload for one eligible assignment.
    #[must_use]
    pub fn new(
        role_definition_id: impl Into<String>,
        resource_id: impl Into<String>,
        subject: &SubjectId,
        reason: impl Into<String>,
        duration: ActivationDuration,
    ) -> Self {
        Self {
            role_definition_id: role_definition_id.into(),
            resource_id: resource_id.into(),
            subject_id: subject.as_str().to_owned(),
            assignment_state: AssignmentState::Active,
            request_type: RequestType::UserAdd,
            reason: reason.into(),
            schedule: ActivationSchedule {
                schedule_type: ScheduleType::Once,
                start_date_time: None,
                end_date_time: None,
                duration: duration.to_iso8601(),
            },
        }
    }
}
