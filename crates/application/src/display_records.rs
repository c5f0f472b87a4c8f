//! Output records, one shape per command.
//!
//! Each record serializes to the command's JSON shape and declares its table
//! projection once through [`TableView`].

use serde::Serialize;

/// Column schema for rendering records as a table.
pub trait TableView {
    /// Column headers, in display order.
    const HEADERS: &'static [&'static str];

    /// Table rows for this record, one cell per header.
    fn rows(&self) -> Vec<Vec<String>>;
}

/// One role a group can be activated under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibleRole {
    /// Role display name.
    pub role: String,
    /// Member type, `Unknown` when the provider omits it.
    pub member_type: String,
}

/// `list` record: a group and the roles eligible in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibleGroup {
    /// Group display name.
    pub group_name: String,
    /// Distinct eligible roles, in provider order.
    pub roles: Vec<EligibleRole>,
}

impl TableView for EligibleGroup {
    const HEADERS: &'static [&'static str] = &["GroupName", "Role", "MemberType"];

    fn rows(&self) -> Vec<Vec<String>> {
        self.roles
            .iter()
            .map(|role| {
                vec![
                    self.group_name.clone(),
                    role.role.clone(),
                    role.member_type.clone(),
                ]
            })
            .collect()
    }
}

/// `active` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveAssignmentRecord {
    /// Group display name.
    pub group_name: String,
    /// Role display name.
    pub role: String,
    /// Member type.
    pub member_type: String,
    /// Formatted expiry.
    pub expires: String,
    /// Countdown, `Expired` or `N/A`.
    pub time_remaining: String,
    /// Normalized status.
    pub status: String,
}

impl TableView for ActiveAssignmentRecord {
    const HEADERS: &'static [&'static str] = &[
        "GroupName",
        "Role",
        "MemberType",
        "Expires",
        "TimeRemaining",
        "Status",
    ];

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.group_name.clone(),
            self.role.clone(),
            self.member_type.clone(),
            self.expires.clone(),
            self.time_remaining.clone(),
            self.status.clone(),
        ]]
    }
}

/// `pending` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingRequestRecord {
    /// Group display name.
    pub group_name: String,
    /// Role display name.
    pub role: String,
    /// Formatted submission time.
    pub requested_at: String,
    /// `status` and `subStatus` joined.
    pub status: String,
}

impl TableView for PendingRequestRecord {
    const HEADERS: &'static [&'static str] = &["GroupName", "Role", "RequestedAt", "Status"];

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.group_name.clone(),
            self.role.clone(),
            self.requested_at.clone(),
            self.status.clone(),
        ]]
    }
}

/// Discriminator of `status` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusRecordType {
    /// Record came from the active assignments.
    Active,
    /// Record came from the pending requests.
    Pending,
}

impl StatusRecordType {
    /// Returns the display value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
        }
    }
}

/// `status` record combining active and pending views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRecord {
    /// Group display name.
    pub group_name: String,
    /// Role display name.
    pub role: String,
    /// Source of the record.
    #[serde(rename = "type")]
    pub record_type: StatusRecordType,
    /// Formatted expiry, active records only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    /// Countdown, active records only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_remaining: Option<String>,
    /// Formatted submission time, pending records only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_at: Option<String>,
    /// Normalized status.
    pub status: String,
}

impl From<ActiveAssignmentRecord> for StatusRecord {
    fn from(value: ActiveAssignmentRecord) -> Self {
        Self {
            group_name: value.group_name,
            role: value.role,
            record_type: StatusRecordType::Active,
            expires: Some(value.expires),
            time_remaining: Some(value.time_remaining),
            requested_at: None,
            status: value.status,
        }
    }
}

impl From<PendingRequestRecord> for StatusRecord {
    fn from(value: PendingRequestRecord) -> Self {
        Self {
            group_name: value.group_name,
            role: value.role,
            record_type: StatusRecordType::Pending,
            expires: None,
            time_remaining: None,
            requested_at: Some(value.requested_at),
            status: value.status,
        }
    }
}

impl TableView for StatusRecord {
    const HEADERS: &'static [&'static str] = &[
        "GroupName",
        "Role",
        "Type",
        "Expires",
        "TimeRemaining",
        "RequestedAt",
        "Status",
    ];

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.group_name.clone(),
            self.role.clone(),
            self.record_type.as_str().to_owned(),
            self.expires.clone().unwrap_or_default(),
            self.time_remaining.clone().unwrap_or_default(),
            self.requested_at.clone().unwrap_or_default(),
            self.status.clone(),
        ]]
    }
}

/// `request` record summarizing one activation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationRecord {
    /// Requested group.
    pub group_name: String,
    /// Requested role, as typed by the caller.
    pub role: String,
    /// Provider status, or the provider message when already active.
    pub status: String,
    /// Justification.
    pub reason: String,
    /// Requested length, such as `12 hours`.
    pub duration: String,
}

impl TableView for ActivationRecord {
    const HEADERS: &'static [&'static str] = &["GroupName", "Role", "Status", "Reason", "Duration"];

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.group_name.clone(),
            self.role.clone(),
            self.status.clone(),
            self.reason.clone(),
            self.duration.clone(),
        ]]
    }
}
