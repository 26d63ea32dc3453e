//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Crosscheck - fact-check a statement against multiple evidence providers.
#[derive(Debug, Parser)]
#[command(name = "crosscheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CROSSCHECK_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (status and confidence only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fact-check a statement
    Check(CheckArgs),

    /// Verify that the configured API keys are accepted
    Probe,

    /// Inspect or edit the configuration file
    Config(ConfigArgs),
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Statement to check (multiple words are joined with spaces)
    #[arg(required = true)]
    pub claim: Vec<String>,

    /// Per-provider timeout in seconds (overrides the config file)
    #[arg(short, long)]
    pub timeout: Option<u64>,
}

impl CheckArgs {
    /// The claim as a single string
    pub fn claim_text(&self) -> String {
        self.claim.join(" ")
    }
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration (keys are masked)
    Show,

    /// Print the configuration file path
    Path,

    /// Store an API key
    SetKey {
        /// Provider the key belongs to
        #[arg(value_enum)]
        provider: ProviderArg,

        /// The API key
        key: String,
    },
}

/// Provider selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ProviderArg {
    /// Exa answer API
    Exa,
    /// Perplexity chat API
    Perplexity,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
