//! Shared primitives for all Rust crates in pimctl.

#![forbid(unsafe_code)]

/// Identity primitives for the signed-in principal.
pub mod subject;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use subject::SubjectId;

/// Result type used across pimctl crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid command input, detected before any network call.
    #[error("validation error: {0}")]
    Validation(String),

    /// No eligible assignment matched the requested group and role.
    #[error("{0}")]
    NotFound(String),

    /// The PIM API answered with a non-success status.
    #[error("{message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Provider error message, or the raw status and body.
        message: String,
    },

    /// The provider answered successfully but the body could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The caller is not signed in or no token could be acquired.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The HTTP exchange itself failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns true when this is a provider error saying the role is already active.
    ///
    /// Only [`AppError::Api`] qualifies; local failures never trigger the
    /// already-active recovery.
    #[must_use]
    pub fn is_already_active(&self) -> bool {
        match self {
            Self::Api { message, .. } => is_already_active_error(message),
            _ => false,
        }
    }
}

/// Heuristic for provider messages reporting an already-active assignment.
///
/// The provider exposes no structured code for this case, so the message is
/// matched case-insensitively on `already` or `active`.
#[must_use]
pub fn is_already_active_error(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains("already") || message.contains("active")
}
