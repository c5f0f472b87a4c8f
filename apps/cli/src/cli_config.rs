use std::env;
use std::time::Duration;

use pimctl_application::{DEFAULT_PIM_API_BASE_URL, DEFAULT_PIM_API_SCOPE};
use pimctl_core::{AppError, AppResult};
use pimctl_infrastructure::{DEFAULT_GRAPH_API_BASE_URL, DEFAULT_GRAPH_API_SCOPE};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub pim_api_base_url: String,
    pub pim_api_scope: String,
    pub graph_api_base_url: String,
    pub graph_api_scope: String,
    pub http_timeout: Duration,
    pub az_cli_path: String,
}

impl CliConfig {
    pub fn load() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let setting = |name: &str, default: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        let pim_api_base_url = parse_base_url(
            "PIM_API_BASE_URL",
            setting("PIM_API_BASE_URL", DEFAULT_PIM_API_BASE_URL),
        )?;
        let graph_api_base_url = parse_base_url(
            "GRAPH_API_BASE_URL",
            setting("GRAPH_API_BASE_URL", DEFAULT_GRAPH_API_BASE_URL),
        )?;

        let timeout_secs = match lookup("PIM_HTTP_TIMEOUT_SECS") {
            Some(value) => value.trim().parse::<u64>().map_err(|error| {
                AppError::Validation(format!(
                    "invalid PIM_HTTP_TIMEOUT_SECS value '{value}': {error}"
                ))
            })?,
            None => 30,
        };
        if timeout_secs == 0 {
            return Err(AppError::Validation(
                "PIM_HTTP_TIMEOUT_SECS must be greater than zero".to_owned(),
            ));
        }

        Ok(Self {
            pim_api_base_url,
            pim_api_scope: setting("PIM_API_SCOPE", DEFAULT_PIM_API_SCOPE),
            graph_api_base_url,
            graph_api_scope: setting("GRAPH_API_SCOPE", DEFAULT_GRAPH_API_SCOPE),
            http_timeout: Duration::from_secs(timeout_secs),
            az_cli_path: setting("AZ_CLI_PATH", "az"),
        })
    }
}

fn parse_base_url(name: &str, value: String) -> AppResult<String> {
    let url = Url::parse(value.as_str())
        .map_err(|error| AppError::Validation(format!("invalid {name} value '{value}': {error}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::Validation(format!(
            "{name} must use http or https, got '{}'",
            url.scheme()
        )));
    }

    Ok(value.trim_end_matches('/').to_owned())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use pimctl_core::AppError;

    use super::CliConfig;

    fn load_with(values: &[(&str, &str)]) -> Result<CliConfig, AppError> {
        let values: HashMap<String, String> = values
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        CliConfig::from_lookup(|name| values.get(name).cloned())
    }

    #[test]
    fn defaults_target_public_cloud() {
        let config = load_with(&[]).unwrap_or_else(|error| panic!("{error}"));

        assert_eq!(
            config.pim_api_base_url,
            "https://api.azrbac.mspim.azure.com/api/v2/privilegedAccess/aadGroups"
        );
        assert_eq!(config.pim_api_scope, "https://api.azrbac.mspim.azure.com");
        assert_eq!(config.graph_api_base_url, "https://graph.microsoft.com/v1.0");
        assert_eq!(config.graph_api_scope, "https://graph.microsoft.com");
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert_eq!(config.az_cli_path, "az");
    }

    #[test]
    fn overrides_are_trimmed() {
        let config = load_with(&[
            ("PIM_API_BASE_URL", "http://localhost:8080/aadGroups/"),
            ("PIM_HTTP_TIMEOUT_SECS", "5"),
            ("AZ_CLI_PATH", " /opt/az/bin/az "),
        ])
        .unwrap_or_else(|error| panic!("{error}"));

        assert_eq!(config.pim_api_base_url, "http://localhost:8080/aadGroups");
        assert_eq!(config.http_timeout, Duration::from_secs(5));
        assert_eq!(config.az_cli_path, "/opt/az/bin/az");
    }

    #[test]
    fn rejects_zero_timeout() {
        let result = load_with(&[("PIM_HTTP_TIMEOUT_SECS", "0")]);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn rejects_unparseable_timeout() {
        let result = load_with(&[("PIM_HTTP_TIMEOUT_SECS", "soon")]);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let result = load_with(&[("GRAPH_API_BASE_URL", "ftp://graph.test")]);
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = load_with(&[("PIM_API_BASE_URL", "not a url")]);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
