use async_trait::async_trait;
use pimctl_application::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use pimctl_core::{AppError, AppResult};
use reqwest::header;

/// HTTP transport backed by a shared `reqwest` client.
///
/// Timeouts come from the client configuration; nothing is retried.
#[derive(Clone)]
pub struct ReqwestHttpTransport {
    http_client: reqwest::Client,
}

impl ReqwestHttpTransport {
    /// Creates a transport using the given client.
    #[must_use]
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestHttpTransport {
    async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        let builder = match request.method {
            HttpMethod::Get => self.http_client.get(request.url.as_str()),
            HttpMethod::Post => self.http_client.post(request.url.as_str()),
        };
        let builder = builder
            .bearer_auth(request.bearer_token.as_str())
            .header(header::CONTENT_TYPE, "application/json");
        let builder = match request.body.as_ref() {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await.map_err(|error| {
            AppError::Transport(format!(
                "{} {} failed: {error}",
                request.method.as_str(),
                request.url
            ))
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|error| {
            AppError::Transport(format!("failed to read response body: {error}"))
        })?;

        Ok(HttpResponse { status, body })
    }
}
