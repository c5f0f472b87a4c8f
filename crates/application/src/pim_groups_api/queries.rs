use pimctl_core::{AppResult, SubjectId};
use pimctl_domain::{AssignmentState, RoleAssignment, RoleAssignmentRequest};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::pim_api_client::decode;
use crate::pim_ports::HttpMethod;

use super::{PimGroupsApi, ROLE_ASSIGNMENT_REQUESTS, ROLE_ASSIGNMENTS};

/// Sub-status of requests waiting on an approver.
pub const PENDING_APPROVAL: &str = "PendingApproval";

#[derive(Deserialize)]
struct Collection<T> {
    value: Option<Vec<T>>,
}

impl PimGroupsApi {
    /// Lists the subject's assignments, optionally restricted to one state.
    pub async fn list_assignments(
        &self,
        subject: &SubjectId,
        state: Option<AssignmentState>,
    ) -> AppResult<Vec<RoleAssignment>> {
        let filter = assignments_filter(subject, state);
        self.list_collection(ROLE_ASSIGNMENTS, filter.as_str(), "role assignment")
            .await
    }

    /// Lists the subject's assignment requests, optionally restricted to one
    /// sub-status such as [`PENDING_APPROVAL`].
    pub async fn list_assignment_requests(
        &self,
        subject: &SubjectId,
        sub_status: Option<&str>,
    ) -> AppResult<Vec<RoleAssignmentRequest>> {
        let filter = assignment_requests_filter(subject, sub_status);
        self.list_collection(
            ROLE_ASSIGNMENT_REQUESTS,
            filter.as_str(),
            "role assignment request",
        )
        .await
    }

    async fn list_collection<T: DeserializeOwned>(
        &self,
        collection: &str,
        filter: &str,
        what: &str,
    ) -> AppResult<Vec<T>> {
        let url = self.query_url(collection, filter);
        let Some(body) = self.client.request(HttpMethod::Get, url.as_str(), None).await? else {
            return Ok(Vec::new());
        };

        let items = decode::<Collection<T>>(body, what)?
            .value
            .unwrap_or_default();
        debug!(collection = collection, count = items.len(), "listed PIM collection");
        Ok(items)
    }

    pub(super) fn query_url(&self, collection: &str, filter: &str) -> String {
        format!(
            "{}?$filter={}&$expand=resource,roleDefinition",
            self.collection_url(collection),
            urlencoding::encode(filter)
        )
    }
}

pub(super) fn assignments_filter(subject: &SubjectId, state: Option<AssignmentState>) -> String {
    let mut filter = subject_clause(subject);
    if let Some(state) = state {
        filter.push_str(" and assignmentState eq ");
        filter.push_str(odata_literal(state.as_str()).as_str());
    }
    filter
}

pub(super) fn assignment_requests_filter(subject: &SubjectId, sub_status: Option<&str>) -> String {
    let mut filter = subject_clause(subject);
    if let Some(sub_status) = sub_status {
        filter.push_str(" and status/subStatus eq ");
        filter.push_str(odata_literal(sub_status).as_str());
    }
    filter
}

fn subject_clause(subject: &SubjectId) -> String {
    format!("subjectId eq {}", odata_literal(subject.as_str()))
}

// OData string literals escape a single quote by doubling it.
fn odata_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
