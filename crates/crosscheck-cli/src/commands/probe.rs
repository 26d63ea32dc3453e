//! Probe command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crosscheck_engine::{FactChecker, ProbeOutcome};

/// Execute the probe command.
pub async fn execute_probe(config: &Config, formatter: &Formatter) -> Result<Vec<ProbeOutcome>> {
    let providers = config.build_providers()?;
    let outcomes = FactChecker::new(config.engine.clone()).probe(&providers).await?;

    println!("{}", formatter.format_probe(&outcomes)?);
    Ok(outcomes)
}
