use std::sync::Arc;

use async_trait::async_trait;
use pimctl_application::{
    AccessTokenProvider, DirectoryLookup, HttpMethod, HttpRequest, HttpTransport,
};
use pimctl_core::{AppError, AppResult, SubjectId};
use serde::Deserialize;

/// Microsoft Graph v1.0 endpoint.
pub const DEFAULT_GRAPH_API_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

/// Token audience of Microsoft Graph.
pub const DEFAULT_GRAPH_API_SCOPE: &str = "https://graph.microsoft.com";

#[derive(Deserialize)]
struct SignedInUser {
    id: String,
}

/// Resolves the signed-in user through Microsoft Graph `GET /me`.
#[derive(Clone)]
pub struct GraphDirectoryLookup {
    transport: Arc<dyn HttpTransport>,
    token_provider: Arc<dyn AccessTokenProvider>,
    base_url: String,
    scope: String,
}

impl GraphDirectoryLookup {
    /// Creates a lookup against the given Graph endpoint and token scope.
    #[must_use]
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        token_provider: Arc<dyn AccessTokenProvider>,
        base_url: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            token_provider,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            scope: scope.into(),
        }
    }
}

#[async_trait]
impl DirectoryLookup for GraphDirectoryLookup {
    async fn signed_in_user_id(&self) -> AppResult<SubjectId> {
        let bearer_token = self.token_provider.access_token(self.scope.as_str()).await?;
        let response = self
            .transport
            .send(HttpRequest {
                method: HttpMethod::Get,
                url: format!("{}/me?$select=id", self.base_url),
                bearer_token,
                body: None,
            })
            .await?;

        if !response.is_success() {
            return Err(AppError::Api {
                status: response.status,
                message: format!(
                    "Microsoft Graph error: {} - {}",
                    response.status, response.body
                ),
            });
        }

        let user: SignedInUser = serde_json::from_str(response.body.as_str()).map_err(|error| {
            AppError::MalformedResponse(format!("unexpected signed-in user payload: {error}"))
        })?;

        SubjectId::new(user.id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use pimctl_application::{
        AccessTokenProvider, DirectoryLookup, HttpRequest, HttpResponse, HttpTransport,
    };
    use pimctl_core::{AppError, AppResult};
    use tokio::sync::Mutex;

    use super::GraphDirectoryLookup;

    struct FakeTransport {
        response: HttpResponse,
        requests: Mutex<Vec<HttpRequest>>,
    }

    #[async_trait]
    impl HttpTransport for FakeTransport {
        async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse> {
            self.requests.lock().await.push(request);
            Ok(self.response.clone())
        }
    }

    struct ScopeEchoTokenProvider;

    #[async_trait]
    impl AccessTokenProvider for ScopeEchoTokenProvider {
        async fn access_token(&self, scope: &str) -> AppResult<String> {
            Ok(format!("token-for-{scope}"))
        }
    }

    fn lookup(status: u16, body: &str) -> (GraphDirectoryLookup, Arc<FakeTransport>) {
        let transport = Arc::new(FakeTransport {
            response: HttpResponse {
                status,
                body: body.to_owned(),
            },
            requests: Mutex::new(Vec::new()),
        });
        let lookup = GraphDirectoryLookup::new(
            transport.clone(),
            Arc::new(ScopeEchoTokenProvider),
            "https://graph.test/v1.0/",
            "https://graph.test",
        );
        (lookup, transport)
    }

    #[tokio::test]
    async fn resolves_id_of_signed_in_user() {
        let (lookup, transport) = lookup(200, r#"{"id":"3f2a-11","displayName":"Ada"}"#);

        let subject = lookup.signed_in_user_id().await;

        assert_eq!(subject.ok().map(|s| s.to_string()).as_deref(), Some("3f2a-11"));
        let requests = transport.requests.lock().await;
        assert_eq!(requests[0].url, "https://graph.test/v1.0/me?$select=id");
        assert_eq!(requests[0].bearer_token, "token-for-https://graph.test");
    }

    #[tokio::test]
    async fn graph_failure_is_an_api_error() {
        let (lookup, _) = lookup(401, "unauthorized");

        let subject = lookup.signed_in_user_id().await;

        assert!(matches!(subject, Err(AppError::Api { status: 401, .. })));
    }

    #[tokio::test]
    async fn payload_without_id_is_malformed() {
        let (lookup, _) = lookup(200, r#"{"displayName":"Ada"}"#);

        let subject = lookup.signed_in_user_id().await;

        assert!(matches!(subject, Err(AppError::MalformedResponse(_))));
    }
}
