//! Command orchestrators behind `list`, `active`, `pending`, `status` and
//! `request`.
//!
//! Each command resolves the signed-in subject, runs its queries in
//! sequence and reshapes the results into display records. Empty results
//! are successful outcomes carrying a warning.

mod active;
mod eligible;
mod pending;
mod request;
mod status;


use std::sync::Arc;

use crate::PimGroupsApi;
use crate::pim_ports::DirectoryLookup;

pub use request::ActivationRequestInput;

/// Application service for PIM group commands.
#[derive(Clone)]
pub struct PimCommandService {
    api: PimGroupsApi,
    directory: Arc<dyn DirectoryLookup>,
}

impl PimCommandService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(api: PimGroupsApi, directory: Arc<dyn DirectoryLookup>) -> Self {
        Self { api, directory }
    }
}
