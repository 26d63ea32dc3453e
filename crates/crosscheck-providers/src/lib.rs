//! Crosscheck Evidence Providers
//!
//! Pluggable evidence sources behind a single capability set: build the
//! outbound request for a claim, and parse the response body into an
//! [`EvidenceSignal`]. The engine never branches on which provider it is
//! talking to; new sources are added by implementing [`EvidenceProvider`].
//!
//! # Providers
//!
//! - [`ExaProvider`]: answer-style search API returning prose plus citations
//! - [`PerplexityProvider`]: chat-completion API prompted as a fact checker
//!
//! # Examples
//!
//! ```
//! use crosscheck_providers::{ExaProvider, PerplexityProvider, ProviderConfig};
//! use std::sync::Arc;
//!
//! let providers = vec![
//!     ProviderConfig::new(Arc::new(ExaProvider::new("exa-key")), 0.4),
//!     ProviderConfig::new(Arc::new(PerplexityProvider::new("pplx-key")), 0.6),
//! ];
//! assert_eq!(providers[0].name(), "Exa Labs");
//! assert_eq!(providers[1].weight, 0.6);
//! ```

#![warn(missing_docs)]

pub mod exa;
pub mod perplexity;

use crosscheck_domain::{Claim, EvidenceSignal};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

pub use exa::ExaProvider;
pub use perplexity::PerplexityProvider;

/// Errors that can occur while talking to a provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Network or transport failure
    #[error("Communication error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("HTTP {0}")]
    Status(u16),

    /// Body could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Call exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,
}

impl From<serde_json::Error> for ProviderError {
    fn from(e: serde_json::Error) -> Self {
        ProviderError::InvalidResponse(e.to_string())
    }
}

/// An evidence source
///
/// Implementations only describe their wire format; sending, status checks,
/// timeouts and failure isolation are handled by the engine.
pub trait EvidenceProvider: Send + Sync {
    /// Display name, e.g. "Exa Labs"
    fn name(&self) -> &str;

    /// Build the outbound request for a claim
    fn build_request(&self, client: &reqwest::Client, claim: &Claim) -> reqwest::RequestBuilder;

    /// Parse a successful response body into a signal
    fn parse_response(&self, body: &str) -> Result<EvidenceSignal, ProviderError>;

    /// Build a minimal request that only verifies credentials
    fn probe_request(&self, client: &reqwest::Client) -> reqwest::RequestBuilder;
}

/// A provider together with its aggregation weight
#[derive(Clone)]
pub struct ProviderConfig {
    /// The provider implementation
    pub provider: Arc<dyn EvidenceProvider>,
    /// Weight in (0, 1]
    pub weight: f64,
}

impl ProviderConfig {
    /// Pair a provider with its weight
    pub fn new(provider: Arc<dyn EvidenceProvider>, weight: f64) -> Self {
        Self { provider, weight }
    }

    /// Provider display name
    pub fn name(&self) -> &str {
        self.provider.name()
    }

    /// Whether the weight lies in (0, 1]
    pub fn has_valid_weight(&self) -> bool {
        self.weight > 0.0 && self.weight <= 1.0
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider.name())
            .field("weight", &self.weight)
            .finish()
    }
}
