//! The combined verdict handed to the presentation layer

use crate::{CheckId, EvidenceSignal, Source};
use std::fmt;

/// Confidence at or above which a verdict is rated high
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Confidence at or above which a verdict is rated medium
pub const MEDIUM_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Final status of a fact check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerdictStatus {
    /// Evidence points to the claim being true
    True,
    /// Evidence points to the claim being false
    False,
    /// Mixed or insufficient evidence
    Uncertain,
    /// The fact check could not run
    Error,
}

impl VerdictStatus {
    /// Lowercase wire/display name
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictStatus::True => "true",
            VerdictStatus::False => "false",
            VerdictStatus::Uncertain => "uncertain",
            VerdictStatus::Error => "error",
        }
    }
}

impl fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse confidence band shown next to the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfidenceRating {
    /// Below 0.5
    Low,
    /// In [0.5, 0.7)
    Medium,
    /// 0.7 and above
    High,
}

impl ConfidenceRating {
    /// Band a combined confidence
    ///
    /// # Examples
    ///
    /// ```
    /// use crosscheck_domain::ConfidenceRating;
    ///
    /// assert_eq!(ConfidenceRating::from_confidence(0.7), ConfidenceRating::High);
    /// assert_eq!(ConfidenceRating::from_confidence(0.5), ConfidenceRating::Medium);
    /// assert_eq!(ConfidenceRating::from_confidence(0.49), ConfidenceRating::Low);
    /// ```
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= HIGH_CONFIDENCE_THRESHOLD {
            ConfidenceRating::High
        } else if confidence >= MEDIUM_CONFIDENCE_THRESHOLD {
            ConfidenceRating::Medium
        } else {
            ConfidenceRating::Low
        }
    }

    /// Human label, e.g. "High Confidence"
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceRating::Low => "Low Confidence",
            ConfidenceRating::Medium => "Medium Confidence",
            ConfidenceRating::High => "High Confidence",
        }
    }
}

impl fmt::Display for ConfidenceRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One provider's contribution to a fact check
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderReport {
    /// Provider display name, e.g. "Exa Labs"
    pub provider: String,
    /// Aggregation weight in (0, 1]
    pub weight: f64,
    /// The provider's normalized evidence
    pub signal: EvidenceSignal,
}

impl ProviderReport {
    /// Create a report
    pub fn new(provider: impl Into<String>, weight: f64, signal: EvidenceSignal) -> Self {
        Self {
            provider: provider.into(),
            weight,
            signal,
        }
    }
}

/// Aggregated result of a fact check
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedVerdict {
    /// Correlation id of the request
    pub id: CheckId,
    /// The trimmed claim text (empty for early failures)
    pub claim: String,
    /// Final status
    pub status: VerdictStatus,
    /// Short label, e.g. "Likely True"
    pub title: String,
    /// One-line description of the stance rule that fired
    pub description: String,
    /// Per-provider reasoning, in declaration order
    pub explanation: String,
    /// Deduplicated citations across all providers
    pub sources: Vec<Source>,
    /// Confidence band; absent on error verdicts
    pub rating: Option<ConfidenceRating>,
    /// Weighted confidence
    pub confidence: f64,
    /// Each provider's evidence, in declaration order
    pub details: Vec<ProviderReport>,
}

impl CombinedVerdict {
    /// Structured error result with the same shape as a real verdict
    pub fn failure(
        title: impl Into<String>,
        description: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            id: CheckId::new(),
            claim: String::new(),
            status: VerdictStatus::Error,
            title: title.into(),
            description: description.into(),
            explanation: explanation.into(),
            sources: Vec::new(),
            rating: None,
            confidence: 0.0,
            details: Vec::new(),
        }
    }

    /// Whether this verdict is a structured error
    pub fn is_error(&self) -> bool {
        self.status == VerdictStatus::Error
    }

    /// Look up one provider's evidence by display name
    pub fn detail(&self, provider: &str) -> Option<&EvidenceSignal> {
        self.details
            .iter()
            .find(|report| report.provider == provider)
            .map(|report| &report.signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vote;

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(ConfidenceRating::from_confidence(1.0), ConfidenceRating::High);
        assert_eq!(ConfidenceRating::from_confidence(0.69), ConfidenceRating::Medium);
        assert_eq!(ConfidenceRating::from_confidence(0.0), ConfidenceRating::Low);
    }

    #[test]
    fn test_rating_labels() {
        assert_eq!(ConfidenceRating::Low.to_string(), "Low Confidence");
        assert_eq!(ConfidenceRating::Medium.to_string(), "Medium Confidence");
        assert_eq!(ConfidenceRating::High.to_string(), "High Confidence");
    }

    #[test]
    fn test_failure_shape() {
        let verdict = CombinedVerdict::failure("Configuration Error", "Missing keys", "Set them");
        assert!(verdict.is_error());
        assert_eq!(verdict.status.as_str(), "error");
        assert!(verdict.sources.is_empty());
        assert!(verdict.rating.is_none());
        assert!(verdict.details.is_empty());
    }

    #[test]
    fn test_detail_lookup() {
        let mut verdict = CombinedVerdict::failure("t", "d", "e");
        verdict.details.push(ProviderReport::new(
            "Exa Labs",
            0.4,
            EvidenceSignal::new(Vote::Support, 0.7, "true"),
        ));
        assert_eq!(verdict.detail("Exa Labs").unwrap().vote, Vote::Support);
        assert!(verdict.detail("Perplexity AI").is_none());
    }
}
