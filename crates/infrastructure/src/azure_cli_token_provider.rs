//! Token acquisition through the Azure CLI login session.

use async_trait::async_trait;
use pimctl_application::AccessTokenProvider;
use pimctl_core::{AppError, AppResult};
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AzureCliAccessToken {
    access_token: String,
}

/// Acquires tokens with `az account get-access-token`.
///
/// Tokens are fetched on every call and never cached.
#[derive(Debug, Clone)]
pub struct AzureCliTokenProvider {
    program: String,
}

impl AzureCliTokenProvider {
    /// Creates a provider invoking the given `az` executable.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl AccessTokenProvider for AzureCliTokenProvider {
    async fn access_token(&self, scope: &str) -> AppResult<String> {
        debug!(scope = scope, "acquiring access token from Azure CLI");
        let output = Command::new(self.program.as_str())
            .args([
                "account",
                "get-access-token",
                "--resource",
                scope,
                "--output",
                "json",
            ])
            .output()
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to run '{}': {error}", self.program))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Unauthorized(format!(
                "could not acquire a token for '{scope}', run 'az login' first: {}",
                stderr.trim()
            )));
        }

        parse_access_token(&output.stdout)
    }
}

fn parse_access_token(stdout: &[u8]) -> AppResult<String> {
    let token: AzureCliAccessToken = serde_json::from_slice(stdout).map_err(|error| {
        AppError::Internal(format!("unexpected 'az account get-access-token' output: {error}"))
    })?;

    if token.access_token.trim().is_empty() {
        return Err(AppError::Unauthorized(
            "Azure CLI returned an empty access token".to_owned(),
        ));
    }

    Ok(token.access_token)
}
