//! pimctl command-line entry point.

#![forbid(unsafe_code)]

mod cli_config;
mod commands;
mod output;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use pimctl_application::{
    AccessTokenProvider, HttpTransport, PimApiClient, PimCommandService, PimGroupsApi,
};
use pimctl_core::{AppError, AppResult};
use pimctl_infrastructure::{AzureCliTokenProvider, GraphDirectoryLookup, ReqwestHttpTransport};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli_config::CliConfig;
use crate::commands::{Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = CliConfig::load()?;
    debug!(
        pim_api_base_url = %config.pim_api_base_url,
        graph_api_base_url = %config.graph_api_base_url,
        "loaded configuration"
    );
    let service = build_service(&config)?;
    let format = cli.output;

    let (warnings, rendered) = match cli.command {
        Commands::List => {
            let outcome = service.list_eligible().await?;
            (outcome.warnings, output::render_records(&outcome.records, format)?)
        }
        Commands::Active => {
            let outcome = service.list_active().await?;
            (outcome.warnings, output::render_records(&outcome.records, format)?)
        }
        Commands::Pending => {
            let outcome = service.list_pending().await?;
            (outcome.warnings, output::render_records(&outcome.records, format)?)
        }
        Commands::Status => {
            let outcome = service.list_status().await?;
            (outcome.warnings, output::render_records(&outcome.records, format)?)
        }
        Commands::Request(args) => {
            let outcome = service.request_activation(args.into()).await?;
            (outcome.warnings, output::render_record(&outcome.records, format)?)
        }
    };

    for warning in &warnings {
        eprintln!("WARNING: {warning}");
    }
    if !rendered.is_empty() {
        println!("{rendered}");
    }

    Ok(())
}

fn build_service(config: &CliConfig) -> AppResult<PimCommandService> {
    let http_client = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .map_err(|error| AppError::Internal(format!("failed to build HTTP client: {error}")))?;

    let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestHttpTransport::new(http_client));
    let token_provider: Arc<dyn AccessTokenProvider> =
        Arc::new(AzureCliTokenProvider::new(config.az_cli_path.clone()));

    let client = PimApiClient::new(
        transport.clone(),
        token_provider.clone(),
        config.pim_api_scope.clone(),
    );
    let api = PimGroupsApi::new(client, config.pim_api_base_url.clone());
    let directory = Arc::new(GraphDirectoryLookup::new(
        transport,
        token_provider,
        config.graph_api_base_url.clone(),
        config.graph_api_scope.clone(),
    ));

    Ok(PimCommandService::new(api, directory))
}

fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
