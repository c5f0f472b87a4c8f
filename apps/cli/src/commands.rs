use clap::{Args, Parser, Subcommand, ValueEnum};
use pimctl_application::ActivationRequestInput;

/// Activate and inspect Privileged Identity Management group memberships
#[derive(Debug, Parser)]
#[command(name = "pimctl", author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Log outbound requests to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List groups you are eligible to activate
    List,

    /// Show your active group assignments
    Active,

    /// Show your activation requests awaiting approval
    Pending,

    /// Show active assignments followed by pending requests
    Status,

    /// Request activation of an eligible group
    Request(RequestArgs),
}

#[derive(Debug, Args)]
pub struct RequestArgs {
    /// Display name of the group, matched exactly
    #[arg(long, short = 'n')]
    pub name: String,

    /// Justification for the activation
    #[arg(long, short = 'r')]
    pub reason: String,

    /// Activation length in hours
    #[arg(long, short = 'd', default_value_t = 12.0)]
    pub duration: f64,

    /// Role to activate, matched case-insensitively
    #[arg(long, default_value = "Member")]
    pub role: String,
}

impl From<RequestArgs> for ActivationRequestInput {
    fn from(args: RequestArgs) -> Self {
        Self {
            name: args.name,
            reason: args.reason,
            duration_hours: args.duration,
            role: args.role,
        }
    }
}
