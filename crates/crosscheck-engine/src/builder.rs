//! Evidence signal builder
//!
//! Wraps one provider call. Whatever happens on the wire, the caller gets a
//! well-formed [`ProviderReport`]; failures become the canonical low-confidence
//! neutral signal.

use crosscheck_domain::{CheckId, Claim, EvidenceSignal, ProviderReport};
use crosscheck_providers::{ProviderConfig, ProviderError};
use std::time::Duration;
use tracing::{debug, warn};

/// Query one provider and normalize its answer
///
/// Never fails: transport errors, non-2xx statuses, unparseable bodies and
/// timeouts are logged and replaced by [`EvidenceSignal::failed`].
pub async fn build_signal(
    client: &reqwest::Client,
    check_id: CheckId,
    claim: &Claim,
    config: &ProviderConfig,
    timeout: Option<Duration>,
) -> ProviderReport {
    let name = config.name();
    debug!(check = %check_id.short(), provider = name, "Querying provider");

    let outcome = match timeout {
        Some(limit) => tokio::time::timeout(limit, fetch_signal(client, claim, config))
            .await
            .unwrap_or(Err(ProviderError::Timeout)),
        None => fetch_signal(client, claim, config).await,
    };

    let signal = match outcome {
        Ok(signal) => {
            debug!(
                check = %check_id.short(),
                provider = name,
                vote = %signal.vote,
                confidence = signal.confidence,
                sources = signal.sources.len(),
                "Provider answered"
            );
            signal
        }
        Err(e) => {
            warn!(check = %check_id.short(), provider = name, error = %e, "Provider failed, using fallback signal");
            EvidenceSignal::failed(name)
        }
    };

    ProviderReport::new(name, config.weight, signal)
}

async fn fetch_signal(
    client: &reqwest::Client,
    claim: &Claim,
    config: &ProviderConfig,
) -> Result<EvidenceSignal, ProviderError> {
    let response = config.provider.build_request(client, claim).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    config.provider.parse_response(&body)
}
