//! Classifier for chat-completion style responses

use crate::rules::{apply_first_match, Classification, KeywordRule};
use crosscheck_domain::Vote;
use regex::Regex;
use std::sync::LazyLock;

/// Stance rules, in priority order.
///
/// Text containing both "true" and "false" matches neither of the first two
/// rules and stays neutral.
const CHAT_RULES: &[KeywordRule] = &[
    KeywordRule {
        vote: Vote::Support,
        any_of: &["true"],
        none_of: &["false"],
        confidence: None,
    },
    KeywordRule {
        vote: Vote::Contradict,
        any_of: &["false"],
        none_of: &["true"],
        confidence: None,
    },
    KeywordRule {
        vote: Vote::Neutral,
        any_of: &["uncertain", "unclear"],
        none_of: &[],
        confidence: None,
    },
];

static CONFIDENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:confidence|certainty).*?([0-9]+(?:\.[0-9]+)?)").expect("confidence pattern is valid")
});

/// Find a stated confidence figure
///
/// Takes the first number following "confidence" or "certainty" on the same
/// line. Values up to 1 are used as-is, values up to 100 are read as
/// percentages, anything larger is ignored.
///
/// # Examples
///
/// ```
/// use crosscheck_classifier::extract_confidence;
///
/// assert_eq!(extract_confidence("Confidence level: 0.9"), Some(0.9));
/// assert_eq!(extract_confidence("certainty 85%"), Some(0.85));
/// assert_eq!(extract_confidence("confidence 250"), None);
/// assert_eq!(extract_confidence("no figure here"), None);
/// ```
pub fn extract_confidence(text: &str) -> Option<f64> {
    let captures = CONFIDENCE_PATTERN.captures(text)?;
    let value: f64 = captures.get(1)?.as_str().parse().ok()?;

    if value <= 1.0 {
        Some(value)
    } else if value <= 100.0 {
        Some(value / 100.0)
    } else {
        None
    }
}

/// Classify a chat-completion response
///
/// Never fails: empty or unrecognized text yields a neutral classification
/// at 0.5.
pub fn classify(text: &str) -> Classification {
    let lowered = text.to_lowercase();
    let mut classification = Classification::neutral(text);

    apply_first_match(CHAT_RULES, &lowered, &mut classification);

    if let Some(confidence) = extract_confidence(text) {
        classification.confidence = confidence;
    }

    classification
}
