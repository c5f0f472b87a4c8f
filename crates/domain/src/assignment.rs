use std::fmt::{Display, Formatter};

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a group role assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentState {
    /// Standing grant that confers no access until activated.
    Eligible,
    /// Time-bounded elevation currently in effect.
    Active,
}

impl AssignmentState {
    /// Returns the wire value used in OData filters and payloads.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eligible => "Eligible",
            Self::Active => "Active",
        }
    }
}

impl Display for AssignmentState {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Canonical status shape.
///
/// The provider returns either a bare string or a `{status, subStatus}`
/// object depending on the collection. Both decode into this type, so
/// consumers never branch on the wire shape. Any other shape decodes as a
/// status with neither field set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "WireStatus")]
pub struct AssignmentStatus {
    /// Primary status value, such as `Provisioned` or `Pending`.
    pub status: Option<String>,
    /// Secondary status value, such as `PendingApproval`.
    pub sub_status: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireStatus {
    Text(String),
    Detailed {
        #[serde(default)]
        status: Option<String>,
        #[serde(default, rename = "subStatus")]
        sub_status: Option<String>,
    },
    Unrecognized(IgnoredAny),
}

impl From<WireStatus> for AssignmentStatus {
    fn from(value: WireStatus) -> Self {
        match value {
            WireStatus::Text(status) => Self {
                status: Some(status),
                sub_status: None,
            },
            WireStatus::Detailed { status, sub_status } => Self { status, sub_status },
            WireStatus::Unrecognized(_) => Self::default(),
        }
    }
}

impl AssignmentStatus {
    /// Returns the primary status, or `Unknown` when the provider sent none.
    #[must_use]
    pub fn primary_or_unknown(&self) -> String {
        self.status.clone().unwrap_or_else(|| "Unknown".to_owned())
    }

    /// Returns `status` and `subStatus` joined by a space, trimmed.
    #[must_use]
    pub fn combined(&self) -> String {
        format!(
            "{} {}",
            self.status.as_deref().unwrap_or_default(),
            self.sub_status.as_deref().unwrap_or_default()
        )
        .trim()
        .to_owned()
    }
}

/// Expanded group resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResource {
    /// Resource identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Group display name.
    pub display_name: String,
}

/// Expanded role definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinitionRef {
    /// Role definition identifier used when requesting activation.
    pub id: String,
    /// Role display name, such as `Member` or `Owner`.
    pub display_name: String,
}

/// A subject's eligible or active relationship to a group under a role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    /// Assignment identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Group resource identifier.
    #[serde(default)]
    pub resource_id: Option<String>,
    /// Subject the assignment belongs to.
    #[serde(default)]
    pub subject_id: Option<String>,
    /// Member type as reported by the provider.
    #[serde(default)]
    pub member_type: Option<String>,
    /// Wire value of the assignment state.
    #[serde(default)]
    pub assignment_state: Option<String>,
    /// Expiry timestamp, absent for permanent assignments.
    #[serde(default)]
    pub end_date_time: Option<String>,
    /// Normalized assignment status.
    #[serde(default)]
    pub status: Option<AssignmentStatus>,
    /// Expanded group resource.
    pub resource: GroupResource,
    /// Expanded role definition.
    pub role_definition: RoleDefinitionRef,
}

impl RoleAssignment {
    /// Returns the group display name.
    #[must_use]
    pub fn group_name(&self) -> &str {
        self.resource.display_name.as_str()
    }

    /// Returns the role display name.
    #[must_use]
    pub fn role_name(&self) -> &str {
        self.role_definition.display_name.as_str()
    }

    /// Returns the group resource identifier, falling back to the expanded
    /// resource's id.
    #[must_use]
    pub fn group_resource_id(&self) -> Option<&str> {
        self.resource_id
            .as_deref()
            .or(self.resource.id.as_deref())
            .filter(|id| !id.trim().is_empty())
    }

    /// Returns the member type, or `Unknown` when absent.
    #[must_use]
    pub fn member_type_or_unknown(&self) -> &str {
        self.member_type.as_deref().unwrap_or("Unknown")
    }

    /// Returns true when this assignment is for `group_name` (exact) under
    /// `role_name` (ignoring case).
    #[must_use]
    pub fn matches(&self, group_name: &str, role_name: &str) -> bool {
        self.group_name() == group_name
            && self.role_name().to_lowercase() == role_name.to_lowercase()
    }
}

/// A submitted activation request, possibly awaiting approval.
///
/// Listing responses carry the expanded `resource` and `roleDefinition`;
/// creation responses usually do not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignmentRequest {
    /// Request identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Group resource identifier.
    #[serde(default)]
    pub resource_id: Option<String>,
    /// Role definition identifier.
    #[serde(default)]
    pub role_definition_id: Option<String>,
    /// Submission timestamp.
    #[serde(default)]
    pub requested_date_time: Option<String>,
    /// Normalized request status.
    #[serde(default)]
    pub status: Option<AssignmentStatus>,
    /// Expanded group resource.
    #[serde(default)]
    pub resource: Option<GroupResource>,
    /// Expanded role definition.
    #[serde(default)]
    pub role_definition: Option<RoleDefinitionRef>,
}
