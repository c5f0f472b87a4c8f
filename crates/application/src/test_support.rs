//! Scripted port implementations shared by service tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use pimctl_core::{AppError, AppResult, SubjectId};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::pim_ports::{
    AccessTokenProvider, DirectoryLookup, HttpRequest, HttpResponse, HttpTransport,
};
use crate::{PimApiClient, PimGroupsApi};

pub(crate) const BASE_URL: &str = "https://pim.test/api/v2/privilegedAccess/aadGroups";

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    pub(crate) requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub(crate) async fn respond(&self, status: u16, body: Value) {
        self.respond_raw(status, body.to_string().as_str()).await;
    }

    pub(crate) async fn respond_raw(&self, status: u16, body: &str) {
        self.responses.lock().await.push_back(HttpResponse {
            status,
            body: body.to_owned(),
        });
    }

    pub(crate) async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        self.requests.lock().await.push(request);
        self.responses
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| AppError::Transport("no scripted response left".to_owned()))
    }
}

pub(crate) struct StaticTokenProvider;

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self, _scope: &str) -> AppResult<String> {
        Ok("test-token".to_owned())
    }
}

/// Directory that always resolves to `u1` and counts lookups.
#[derive(Default)]
pub(crate) struct FakeDirectory {
    pub(crate) lookups: Mutex<usize>,
}

#[async_trait]
impl DirectoryLookup for FakeDirectory {
    async fn signed_in_user_id(&self) -> AppResult<SubjectId> {
        *self.lookups.lock().await += 1;
        SubjectId::new("u1")
    }
}

pub(crate) fn groups_api(transport: Arc<ScriptedTransport>) -> PimGroupsApi {
    let client = PimApiClient::new(transport, Arc::new(StaticTokenProvider), "pim-scope");
    PimGroupsApi::new(client, BASE_URL)
}

/// Eligible or active assignment fixture.
pub(crate) fn assignment(group: &str, role: &str) -> Value {
    serde_json::json!({
        "id": format!("{group}-{role}"),
        "resourceId": format!("res-{group}"),
        "subjectId": "u1",
        "memberType": "Direct",
        "assignmentState": "Eligible",
        "resource": { "id": format!("res-{group}"), "displayName": group },
        "roleDefinition": { "id": format!("role-{role}"), "displayName": role },
    })
}

/// Decodes the `$filter` query parameter of a recorded URL.
pub(crate) fn decoded_filter(url: &str) -> String {
    let encoded = url
        .split_once("$filter=")
        .map(|(_, rest)| rest.split('&').next().unwrap_or_default())
        .unwrap_or_default();
    urlencoding::decode(encoded)
        .map(|filter| filter.into_owned())
        .unwrap_or_default()
}
