//! Fact-check orchestration

use crate::builder::build_signal;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::probe::{probe_provider, ProbeOutcome};
use crosscheck_domain::{combine, CheckId, Claim, CombinedVerdict};
use crosscheck_providers::ProviderConfig;
use futures::future::join_all;
use tracing::info;

/// Runs fact checks against a set of providers
pub struct FactChecker {
    client: reqwest::Client,
    config: EngineConfig,
}

impl FactChecker {
    /// Create a checker with a fresh HTTP client
    pub fn new(config: EngineConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a checker sharing an existing HTTP client
    pub fn with_client(client: reqwest::Client, config: EngineConfig) -> Self {
        Self { client, config }
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Fact-check a claim
    ///
    /// All provider calls are issued concurrently and awaited together; a
    /// failing provider degrades to a fallback signal instead of aborting the
    /// others. Only caller-input problems are returned as errors.
    pub async fn fact_check(
        &self,
        claim_text: &str,
        providers: &[ProviderConfig],
    ) -> Result<CombinedVerdict, EngineError> {
        self.config.validate().map_err(EngineError::Config)?;
        let claim = Claim::new(claim_text).map_err(|_| EngineError::EmptyClaim)?;
        validate_providers(providers)?;

        let check_id = CheckId::new();
        info!(
            check = %check_id.short(),
            providers = providers.len(),
            claim = %claim.preview(80),
            "Starting fact check"
        );

        let timeout = self.config.provider_timeout();
        let reports = join_all(
            providers
                .iter()
                .map(|config| build_signal(&self.client, check_id, &claim, config, timeout)),
        )
        .await;

        let verdict = combine(check_id, &claim, reports, &self.config.aggregation_policy());

        info!(
            check = %check_id.short(),
            status = %verdict.status,
            confidence = verdict.confidence,
            sources = verdict.sources.len(),
            "Fact check complete: {}",
            verdict.title
        );

        Ok(verdict)
    }

    /// Fact-check a claim, folding caller errors into an error verdict
    pub async fn check(&self, claim_text: &str, providers: &[ProviderConfig]) -> CombinedVerdict {
        match self.fact_check(claim_text, providers).await {
            Ok(verdict) => verdict,
            Err(e) => {
                info!(error = %e, "Fact check rejected");
                e.into_verdict()
            }
        }
    }

    /// Verify each provider's credentials with a minimal request
    pub async fn probe(&self, providers: &[ProviderConfig]) -> Result<Vec<ProbeOutcome>, EngineError> {
        if providers.is_empty() {
            return Err(EngineError::NoProviders);
        }

        let timeout = self.config.provider_timeout();
        Ok(join_all(
            providers
                .iter()
                .map(|config| probe_provider(&self.client, config, timeout)),
        )
        .await)
    }
}

fn validate_providers(providers: &[ProviderConfig]) -> Result<(), EngineError> {
    if providers.is_empty() {
        return Err(EngineError::NoProviders);
    }

    if let Some(bad) = providers.iter().find(|p| !p.has_valid_weight()) {
        return Err(EngineError::InvalidWeight {
            provider: bad.name().to_string(),
            weight: bad.weight,
        });
    }

    Ok(())
}
