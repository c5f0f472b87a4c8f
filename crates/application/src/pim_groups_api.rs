//! PIM API surface for group role assignments.
//!
//! Wraps the two collections the CLI needs (`roleAssignments` and
//! `roleAssignmentRequests`) on top of [`PimApiClient`].

mod activation;
mod queries;


use crate::PimApiClient;

pub use queries::PENDING_APPROVAL;

/// Base URL of the group PIM API.
pub const DEFAULT_PIM_API_BASE_URL: &str =
    "https://api.azrbac.mspim.azure.com/api/v2/privilegedAccess/aadGroups";

/// Token audience of the PIM API.
pub const DEFAULT_PIM_API_SCOPE: &str = "https://api.azrbac.mspim.azure.com";

const ROLE_ASSIGNMENTS: &str = "roleAssignments";
const ROLE_ASSIGNMENT_REQUESTS: &str = "roleAssignmentRequests";

/// Query layer and activation builder for group assignments.
#[derive(Clone)]
pub struct PimGroupsApi {
    client: PimApiClient,
    base_url: String,
}

impl PimGroupsApi {
    /// Creates an API wrapper rooted at `base_url`.
    #[must_use]
    pub fn new(client: PimApiClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { client, base_url }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{collection}", self.base_url)
    }
}
