//! Caller-facing errors for the engine

use crosscheck_domain::CombinedVerdict;
use thiserror::Error;

/// Errors the caller can fix; provider failures never appear here
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Claim text was empty after trimming
    #[error("Claim text is empty")]
    EmptyClaim,

    /// No providers were configured
    #[error("No evidence providers configured")]
    NoProviders,

    /// A provider weight lies outside (0, 1]
    #[error("Invalid weight {weight} for provider '{provider}': must be in (0, 1]")]
    InvalidWeight {
        /// Provider display name
        provider: String,
        /// Offending weight
        weight: f64,
    },

    /// One or more providers lack an API key
    #[error("Missing API key for: {}", .0.join(", "))]
    MissingCredentials(Vec<String>),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EngineError {
    /// Structured error verdict for presentation layers
    pub fn into_verdict(self) -> CombinedVerdict {
        match &self {
            EngineError::MissingCredentials(providers) => CombinedVerdict::failure(
                "Configuration Error",
                "Please configure all API keys.",
                format!("Provide an API key for {}.", providers.join(" and ")),
            ),
            EngineError::Config(_) | EngineError::InvalidWeight { .. } | EngineError::NoProviders => {
                CombinedVerdict::failure("Configuration Error", "The fact checker is misconfigured.", self.to_string())
            }
            EngineError::EmptyClaim => CombinedVerdict::failure(
                "Fact-Check Failed",
                "Unable to verify this statement.",
                self.to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosscheck_domain::VerdictStatus;

    #[test]
    fn test_missing_credentials_verdict() {
        let verdict = EngineError::MissingCredentials(vec!["Exa Labs".into(), "Perplexity AI".into()])
            .into_verdict();
        assert_eq!(verdict.status, VerdictStatus::Error);
        assert_eq!(verdict.title, "Configuration Error");
        assert_eq!(verdict.explanation, "Provide an API key for Exa Labs and Perplexity AI.");
        assert!(verdict.sources.is_empty());
    }

    #[test]
    fn test_empty_claim_verdict() {
        let verdict = EngineError::EmptyClaim.into_verdict();
        assert_eq!(verdict.status, VerdictStatus::Error);
        assert_eq!(verdict.title, "Fact-Check Failed");
        assert_eq!(verdict.explanation, "Claim text is empty");
    }

    #[test]
    fn test_invalid_weight_message() {
        let err = EngineError::InvalidWeight {
            provider: "Exa Labs".into(),
            weight: 1.5,
        };
        assert_eq!(
            err.to_string(),
            "Invalid weight 1.5 for provider 'Exa Labs': must be in (0, 1]"
        );
    }
}
