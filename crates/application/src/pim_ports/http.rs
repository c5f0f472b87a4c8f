use async_trait::async_trait;
use pimctl_core::AppResult;
use serde_json::Value;

/// HTTP methods the PIM API client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Read a collection.
    Get,
    /// Create a request.
    Post,
}

impl HttpMethod {
    /// Returns the method token.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// One outbound HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// Request method.
    pub method: HttpMethod,
    /// Fully formed URL, query already encoded.
    pub url: String,
    /// Bearer token sent in the `Authorization` header.
    pub bearer_token: String,
    /// Optional JSON body.
    pub body: Option<Value>,
}

/// Raw HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Body text, possibly empty.
    pub body: String,
}

impl HttpResponse {
    /// Returns true for statuses in `[200, 300)`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Port for issuing HTTP requests.
///
/// Implementations only fail for transport-level problems; any status code
/// the server answers with is returned as a response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends one request and returns the raw response.
    async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse>;
}
