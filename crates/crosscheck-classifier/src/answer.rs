//! Classifier for answer-style providers
//!
//! These providers return a prose answer together with citations rather than
//! a chat completion. Stances carry fixed confidences, and citing a trusted
//! domain raises the confidence by a fixed boost.

use crate::rules::{apply_first_match, Classification, KeywordRule};
use crosscheck_domain::{Source, Vote};

/// Confidence added when a trusted domain is cited
pub const RELIABILITY_BOOST: f64 = 0.2;

/// Domains whose presence in a source URL triggers the reliability boost
///
/// Matched as plain substrings of the URL.
pub const TRUSTED_DOMAINS: &[&str] = &[
    "wikipedia.org",
    "britannica.com",
    "edu",
    "gov",
    "nature.com",
    "science.org",
    "reuters.com",
    "bbc.com",
];

const ANSWER_RULES: &[KeywordRule] = &[
    KeywordRule {
        vote: Vote::Support,
        any_of: &["true", "correct", "accurate"],
        none_of: &[],
        confidence: Some(0.7),
    },
    KeywordRule {
        vote: Vote::Contradict,
        any_of: &["false", "incorrect", "wrong"],
        none_of: &[],
        confidence: Some(0.7),
    },
    KeywordRule {
        vote: Vote::Neutral,
        any_of: &["uncertain", "unclear", "mixed"],
        none_of: &[],
        confidence: Some(0.4),
    },
];

/// Raise `confidence` by [`RELIABILITY_BOOST`] if any source is trusted, capped at 1.0
///
/// # Examples
///
/// ```
/// use crosscheck_classifier::apply_reliability_boost;
/// use crosscheck_domain::Source;
///
/// let cited = vec![Source::new("Paris", "https://en.wikipedia.org/wiki/Paris")];
/// assert_eq!(apply_reliability_boost(0.9, &cited), 1.0);
/// assert_eq!(apply_reliability_boost(0.5, &[]), 0.5);
/// ```
pub fn apply_reliability_boost(confidence: f64, sources: &[Source]) -> f64 {
    let trusted = sources
        .iter()
        .any(|s| TRUSTED_DOMAINS.iter().any(|d| s.url.contains(d)));

    if trusted {
        (confidence + RELIABILITY_BOOST).min(1.0)
    } else {
        confidence
    }
}

/// Classify an answer and its already-normalized sources
///
/// Rule order matters: the support keywords are checked first, so an answer
/// saying "incorrect" still matches "correct".
pub fn classify_answer(answer: &str, sources: &[Source]) -> Classification {
    let lowered = answer.to_lowercase();
    let mut classification = Classification::neutral(answer);

    apply_first_match(ANSWER_RULES, &lowered, &mut classification);
    classification.confidence = apply_reliability_boost(classification.confidence, sources);

    classification
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_support_keywords() {
        for answer in ["That is true.", "The statement is Correct", "An accurate summary"] {
            let c = classify_answer(answer, &[]);
            assert_eq!(c.verdict, Vote::Support, "{}", answer);
            assert_eq!(c.confidence, 0.7);
        }
    }

    #[test]
    fn test_contradict_keywords() {
        let c = classify_answer("This is FALSE; the date is wrong.", &[]);
        assert_eq!(c.verdict, Vote::Contradict);
        assert_eq!(c.confidence, 0.7);
    }

    #[test]
    fn test_mixed_evidence() {
        let c = classify_answer("The evidence is mixed.", &[]);
        assert_eq!(c.verdict, Vote::Neutral);
        assert_eq!(c.confidence, 0.4);
    }

    #[test]
    fn test_no_keywords() {
        let c = classify_answer("Paris is the capital of France.", &[]);
        assert_eq!(c.verdict, Vote::Neutral);
        assert_eq!(c.confidence, 0.5);
        assert_eq!(c.explanation, "Paris is the capital of France.");
    }

    #[test]
    fn test_support_checked_before_contradict() {
        // "true" matches the support rule before "false" is considered
        let c = classify_answer("Not true, it is false.", &[]);
        assert_eq!(c.verdict, Vote::Support);
    }

    #[test]
    fn test_reliability_boost_applied() {
        let sources = vec![Source::new("Wiki", "https://en.wikipedia.org/wiki/Moon")];
        let c = classify_answer("This is true.", &sources);
        assert_eq!(c.verdict, Vote::Support);
        assert!(approx(c.confidence, 0.9));
    }

    #[test]
    fn test_reliability_boost_capped() {
        let sources = vec![Source::new("Wiki", "https://en.wikipedia.org/wiki/Moon")];
        assert_eq!(apply_reliability_boost(0.9, &sources), 1.0);
    }

    #[test]
    fn test_untrusted_sources_no_boost() {
        let sources = vec![Source::new("Blog", "https://someblog.example.com/post")];
        assert_eq!(apply_reliability_boost(0.7, &sources), 0.7);
    }

    #[test]
    fn test_gov_and_edu_substrings() {
        let gov = vec![Source::new("NASA", "https://www.nasa.gov/moon")];
        let edu = vec![Source::new("MIT", "https://web.mit.edu/physics")];
        assert!(approx(apply_reliability_boost(0.5, &gov), 0.7));
        assert!(approx(apply_reliability_boost(0.5, &edu), 0.7));
    }

    #[test]
    fn test_boost_on_neutral_answer() {
        let sources = vec![Source::new("BBC", "https://www.bbc.com/news/science")];
        let c = classify_answer("", &sources);
        assert_eq!(c.verdict, Vote::Neutral);
        assert!(approx(c.confidence, 0.7));
    }
}
