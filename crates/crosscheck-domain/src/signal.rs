//! Evidence signals produced by a single provider

use std::fmt;

/// Confidence carried by the fallback signal of a failed provider
pub const FAILURE_CONFIDENCE: f64 = 0.1;

/// A discrete stance toward a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vote {
    /// The evidence supports the claim
    Support,
    /// The evidence contradicts the claim
    Contradict,
    /// No usable stance
    Neutral,
}

impl Vote {
    /// Lowercase wire/display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Vote::Support => "support",
            Vote::Contradict => "contradict",
            Vote::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A citation backing a signal
///
/// Identity is the exact `url` string; two sources with the same URL are the
/// same source regardless of name or snippet.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    /// Display title, equal to the URL when the provider gave no title
    pub name: String,
    /// Unique identity key
    pub url: String,
    /// Optional excerpt
    pub snippet: Option<String>,
}

impl Source {
    /// Create a source without a snippet
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            snippet: None,
        }
    }

    /// Attach a snippet
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

/// Normalized output of one provider for one claim
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceSignal {
    /// Stance of this provider
    pub vote: Vote,
    /// Confidence in [0, 1]
    pub confidence: f64,
    /// Citations, at most a handful per provider
    pub sources: Vec<Source>,
    /// Free-text explanation
    pub reasoning: String,
    /// Original provider payload, kept for diagnostics
    pub raw: String,
    /// Set only on the fallback built by [`EvidenceSignal::failed`]
    pub provider_failed: bool,
}

impl EvidenceSignal {
    /// Create a signal with no sources and no raw payload
    ///
    /// Confidence is clamped into [0, 1].
    pub fn new(vote: Vote, confidence: f64, reasoning: impl Into<String>) -> Self {
        Self {
            vote,
            confidence: confidence.clamp(0.0, 1.0),
            sources: Vec::new(),
            reasoning: reasoning.into(),
            raw: String::new(),
            provider_failed: false,
        }
    }

    /// Attach citations
    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = sources;
        self
    }

    /// Attach the raw provider payload
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = raw.into();
        self
    }

    /// The canonical signal for a provider whose call failed
    ///
    /// # Examples
    ///
    /// ```
    /// use crosscheck_domain::{EvidenceSignal, Vote, FAILURE_CONFIDENCE};
    ///
    /// let signal = EvidenceSignal::failed("Exa Labs");
    /// assert_eq!(signal.vote, Vote::Neutral);
    /// assert_eq!(signal.confidence, FAILURE_CONFIDENCE);
    /// assert_eq!(signal.reasoning, "Exa Labs failed");
    /// assert!(signal.sources.is_empty());
    /// ```
    pub fn failed(provider: &str) -> Self {
        Self {
            provider_failed: true,
            ..Self::new(Vote::Neutral, FAILURE_CONFIDENCE, format!("{} failed", provider))
        }
    }

    /// Whether this signal stands in for a failed provider call
    pub fn is_failure(&self) -> bool {
        self.provider_failed
    }
}
