use std::sync::Arc;

use pimctl_core::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::pim_ports::{AccessTokenProvider, HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// Authenticated JSON client for the PIM API.
///
/// A fresh token is acquired for every call and dropped once the call
/// completes. Non-success statuses become [`AppError::Api`]; no call is
/// retried.
#[derive(Clone)]
pub struct PimApiClient {
    transport: Arc<dyn HttpTransport>,
    token_provider: Arc<dyn AccessTokenProvider>,
    scope: String,
}

impl PimApiClient {
    /// Creates a client that authenticates against `scope`.
    #[must_use]
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        token_provider: Arc<dyn AccessTokenProvider>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            token_provider,
            scope: scope.into(),
        }
    }

    /// Sends one request and returns the parsed body.
    ///
    /// Returns `Ok(None)` for a successful response without content.
    pub async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<Value>,
    ) -> AppResult<Option<Value>> {
        let bearer_token = self.token_provider.access_token(self.scope.as_str()).await?;

        debug!(method = method.as_str(), url = url, "calling PIM API");
        let response = self
            .transport
            .send(HttpRequest {
                method,
                url: url.to_owned(),
                bearer_token,
                body,
            })
            .await?;

        if !response.is_success() {
            return Err(api_error(&response));
        }

        if response.body.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(response.body.as_str())
            .map(Some)
            .map_err(|error| {
                AppError::MalformedResponse(format!("PIM API returned invalid JSON: {error}"))
            })
    }
}

/// Decodes a parsed body into a typed value.
pub(crate) fn decode<T: DeserializeOwned>(value: Value, what: &str) -> AppResult<T> {
    serde_json::from_value(value).map_err(|error| {
        AppError::MalformedResponse(format!("unexpected {what} payload: {error}"))
    })
}

fn api_error(response: &HttpResponse) -> AppError {
    let provider_message = serde_json::from_str::<Value>(response.body.as_str())
        .ok()
        .and_then(|payload| {
            payload
                .get("error")?
                .get("message")?
                .as_str()
                .map(str::to_owned)
        });

    AppError::Api {
        status: response.status,
        message: provider_message.unwrap_or_else(|| {
            format!("PIM API error: {} - {}", response.status, response.body)
        }),
    }
}
