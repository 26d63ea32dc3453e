//! Credential probing

use crosscheck_providers::{ProviderConfig, ProviderError};
use std::time::Duration;
use tracing::warn;

/// Result of probing one provider
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    /// Provider display name
    pub provider: String,
    /// `None` on success, otherwise the failure reason
    pub error: Option<String>,
}

impl ProbeOutcome {
    /// Whether the provider accepted the credentials
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

pub(crate) async fn probe_provider(
    client: &reqwest::Client,
    config: &ProviderConfig,
    timeout: Option<Duration>,
) -> ProbeOutcome {
    let name = config.name();

    let outcome = match timeout {
        Some(limit) => tokio::time::timeout(limit, send_probe(client, config))
            .await
            .unwrap_or(Err(ProviderError::Timeout)),
        None => send_probe(client, config).await,
    };

    if let Err(e) = &outcome {
        warn!(provider = name, error = %e, "Credential probe failed");
    }

    ProbeOutcome {
        provider: name.to_string(),
        error: outcome.err().map(|e| format!("{} API test failed: {}", name, e)),
    }
}

async fn send_probe(client: &reqwest::Client, config: &ProviderConfig) -> Result<(), ProviderError> {
    let response = config.provider.probe_request(client).send().await?;
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ProviderError::Status(status.as_u16()))
    }
}
