mod http;
mod identity;

pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use identity::{AccessTokenProvider, DirectoryLookup};
