//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod activation;
mod assignment;
mod time_format;

pub use activation::{
    ActivationDuration, ActivationSchedule, ActivationSubmission, RequestType, ScheduleType,
    encode_duration,
};
pub use assignment::{
    AssignmentState, AssignmentStatus, GroupResource, RoleAssignment, RoleAssignmentRequest,
    RoleDefinitionRef,
};
pub use time_format::{
    EXPIRED, NEVER_EXPIRES, NOT_APPLICABLE, format_datetime, format_time_remaining,
};
