//! Application services and ports.

#![forbid(unsafe_code)]

mod diagnostics;
pub mod display_records;
mod pim_api_client;
mod pim_command_service;
mod pim_groups_api;
mod pim_ports;

#[cfg(test)]
mod test_support;

pub use diagnostics::CommandOutcome;
pub use pim_api_client::PimApiClient;
pub use pim_command_service::{ActivationRequestInput, PimCommandService};
pub use pim_groups_api::{
    DEFAULT_PIM_API_BASE_URL, DEFAULT_PIM_API_SCOPE, PENDING_APPROVAL, PimGroupsApi,
};
pub use pim_ports::{
    AccessTokenProvider, DirectoryLookup, HttpMethod, HttpRequest, HttpResponse, HttpTransport,
};
