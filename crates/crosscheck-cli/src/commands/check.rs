//! Check command implementation.

use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crosscheck_domain::CombinedVerdict;
use crosscheck_engine::FactChecker;
use tracing::debug;

/// Execute the check command.
///
/// Missing credentials and rejected claims are rendered as error verdicts
/// rather than returned as errors, so the caller always gets a verdict back.
pub async fn execute_check(args: CheckArgs, config: &Config, formatter: &Formatter) -> Result<CombinedVerdict> {
    let mut engine = config.engine.clone();
    if let Some(secs) = args.timeout {
        engine.provider_timeout_secs = Some(secs);
    }

    let verdict = match config.build_providers() {
        Ok(providers) => {
            debug!(providers = providers.len(), "Providers configured");
            FactChecker::new(engine).check(&args.claim_text(), &providers).await
        }
        Err(e) => e.into_verdict(),
    };

    println!("{}", formatter.format_verdict(&verdict)?);
    Ok(verdict)
}
