//! Evidence aggregation
//!
//! Combines per-provider evidence into one [`CombinedVerdict`] using a
//! weighted confidence sum and a fixed-priority stance rule. Aggregation is
//! total: every list of reports yields a complete verdict.

use crate::{
    CheckId, Claim, CombinedVerdict, ConfidenceRating, ProviderReport, Source, VerdictStatus, Vote,
};
use std::collections::HashSet;

/// Default cap on merged sources in a verdict
pub const DEFAULT_MAX_SOURCES: usize = 5;

/// Tunables for aggregation
#[derive(Debug, Clone)]
pub struct AggregationPolicy {
    /// Maximum number of merged sources kept in the verdict
    pub max_sources: usize,
}

impl Default for AggregationPolicy {
    fn default() -> Self {
        Self {
            max_sources: DEFAULT_MAX_SOURCES,
        }
    }
}

/// Outcome of stance resolution
///
/// Rules are evaluated in declaration order and the first match wins. A single
/// contradiction outranks any amount of support unless every provider
/// supports the claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stance {
    /// Every provider supports the claim
    Unanimous,
    /// At least one provider contradicts the claim
    Contradicted,
    /// Some provider supports and none contradicts
    PartiallySupported,
    /// Nothing decisive
    Undecided,
}

impl Stance {
    /// Verdict status for this stance
    pub fn status(&self) -> VerdictStatus {
        match self {
            Stance::Unanimous | Stance::PartiallySupported => VerdictStatus::True,
            Stance::Contradicted => VerdictStatus::False,
            Stance::Undecided => VerdictStatus::Uncertain,
        }
    }

    /// Short label
    pub fn title(&self) -> &'static str {
        match self {
            Stance::Unanimous => "Likely True",
            Stance::Contradicted => "Likely False",
            Stance::PartiallySupported => "Possibly True",
            Stance::Undecided => "Uncertain",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            Stance::Unanimous => "Both sources support this claim",
            Stance::Contradicted => "Evidence contradicts this claim",
            Stance::PartiallySupported => "Some evidence supports this claim",
            Stance::Undecided => "Mixed or insufficient evidence",
        }
    }
}

/// Resolve the votes of all providers into a stance
///
/// # Examples
///
/// ```
/// use crosscheck_domain::{resolve_stance, Stance, Vote};
///
/// assert_eq!(resolve_stance(&[Vote::Support, Vote::Support]), Stance::Unanimous);
/// assert_eq!(resolve_stance(&[Vote::Support, Vote::Contradict]), Stance::Contradicted);
/// assert_eq!(resolve_stance(&[Vote::Neutral, Vote::Support]), Stance::PartiallySupported);
/// assert_eq!(resolve_stance(&[Vote::Neutral, Vote::Neutral]), Stance::Undecided);
/// ```
pub fn resolve_stance(votes: &[Vote]) -> Stance {
    if !votes.is_empty() && votes.iter().all(|v| *v == Vote::Support) {
        Stance::Unanimous
    } else if votes.contains(&Vote::Contradict) {
        Stance::Contradicted
    } else if votes.contains(&Vote::Support) {
        Stance::PartiallySupported
    } else {
        Stance::Undecided
    }
}

/// Sum of each signal's confidence times its provider weight
pub fn weighted_confidence(reports: &[ProviderReport]) -> f64 {
    reports
        .iter()
        .fold(0.0, |acc, r| acc + r.signal.confidence * r.weight)
}

/// Concatenate sources in order, keep the first occurrence of each URL, cap
pub fn merge_sources<'a, I>(sources: I, max_sources: usize) -> Vec<Source>
where
    I: IntoIterator<Item = &'a Source>,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut merged = Vec::new();

    for source in sources {
        if merged.len() >= max_sources {
            break;
        }
        if seen.insert(source.url.as_str()) {
            merged.push(source.clone());
        }
    }

    merged
}

/// Join each provider's reasoning as "<provider>: <reasoning>"
fn build_explanation(reports: &[ProviderReport]) -> String {
    reports
        .iter()
        .map(|r| format!("{}: {}", r.provider, r.signal.reasoning))
        .collect::<Vec<_>>()
        .join(". ")
}

/// Combine provider reports into a verdict
///
/// Reports must be in provider declaration order; that order decides which
/// source wins a URL tie and how the explanation reads.
pub fn combine(
    id: CheckId,
    claim: &Claim,
    reports: Vec<ProviderReport>,
    policy: &AggregationPolicy,
) -> CombinedVerdict {
    let confidence = weighted_confidence(&reports);

    let votes: Vec<Vote> = reports.iter().map(|r| r.signal.vote).collect();
    let stance = resolve_stance(&votes);

    let sources = merge_sources(
        reports.iter().flat_map(|r| r.signal.sources.iter()),
        policy.max_sources,
    );

    CombinedVerdict {
        id,
        claim: claim.text().to_string(),
        status: stance.status(),
        title: stance.title().to_string(),
        description: stance.description().to_string(),
        explanation: build_explanation(&reports),
        sources,
        rating: Some(ConfidenceRating::from_confidence(confidence)),
        confidence,
        details: reports,
    }
}
