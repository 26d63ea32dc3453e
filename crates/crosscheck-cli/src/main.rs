//! Crosscheck CLI - fact-check statements against multiple evidence providers.

use clap::Parser;
use crosscheck_cli::commands;
use crosscheck_cli::{Cli, Command, Config, Formatter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns whether the command succeeded; error verdicts and failed probes
/// are already printed and only affect the exit status.
async fn run() -> crosscheck_cli::Result<bool> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::default_path()?,
    };

    let mut stored = Config::load_from(&path)?;
    let mut effective = stored.clone();
    effective.apply_env();

    let format = cli.format.map(Into::into).unwrap_or(effective.settings.format);
    let color_enabled = !cli.no_color && effective.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Check(args) => {
            let verdict = commands::execute_check(args, &effective, &formatter).await?;
            Ok(!verdict.is_error())
        }
        Command::Probe => {
            let outcomes = commands::execute_probe(&effective, &formatter).await?;
            Ok(outcomes.iter().all(|o| o.is_ok()))
        }
        Command::Config(args) => {
            commands::execute_config(args, &mut stored, &effective, &path, &formatter).await?;
            Ok(true)
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
