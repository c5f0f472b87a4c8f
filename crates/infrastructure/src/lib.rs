//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod azure_cli_token_provider;
mod graph_directory_lookup;
mod reqwest_http_transport;

pub use azure_cli_token_provider::AzureCliTokenProvider;
pub use graph_directory_lookup::{
    DEFAULT_GRAPH_API_BASE_URL, DEFAULT_GRAPH_API_SCOPE, GraphDirectoryLookup,
};
pub use reqwest_http_transport::ReqwestHttpTransport;
