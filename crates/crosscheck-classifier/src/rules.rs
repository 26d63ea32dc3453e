//! Ordered keyword rules

use crosscheck_domain::Vote;

/// Confidence used when no rule or figure says otherwise
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Result of classifying one provider response
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Stance inferred from the text
    pub verdict: Vote,
    /// Confidence in [0, 1]
    pub confidence: f64,
    /// The text the stance was drawn from, verbatim
    pub explanation: String,
}

impl Classification {
    /// Neutral classification at the default confidence
    pub fn neutral(text: &str) -> Self {
        Self {
            verdict: Vote::Neutral,
            confidence: DEFAULT_CONFIDENCE,
            explanation: text.to_string(),
        }
    }
}

/// A single lexical rule
///
/// Matches when the lower-cased text contains any of `any_of` and none of
/// `none_of`.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    /// Stance produced on match
    pub vote: Vote,
    /// At least one must be present
    pub any_of: &'static [&'static str],
    /// None may be present
    pub none_of: &'static [&'static str],
    /// Confidence set on match; `None` keeps the current value
    pub confidence: Option<f64>,
}

impl KeywordRule {
    /// Check the rule against already lower-cased text
    pub fn matches(&self, lowered: &str) -> bool {
        self.any_of.iter().any(|k| lowered.contains(k))
            && !self.none_of.iter().any(|k| lowered.contains(k))
    }
}

/// Evaluate rules in order and apply the first match to `classification`
pub(crate) fn apply_first_match(rules: &[KeywordRule], lowered: &str, classification: &mut Classification) {
    if let Some(rule) = rules.iter().find(|r| r.matches(lowered)) {
        classification.verdict = rule.vote;
        if let Some(confidence) = rule.confidence {
            classification.confidence = confidence;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &[KeywordRule] = &[
        KeywordRule {
            vote: Vote::Support,
            any_of: &["yes"],
            none_of: &["no"],
            confidence: Some(0.9),
        },
        KeywordRule {
            vote: Vote::Contradict,
            any_of: &["no"],
            none_of: &[],
            confidence: None,
        },
    ];

    #[test]
    fn test_first_match_wins() {
        let mut c = Classification::neutral("yes");
        apply_first_match(RULES, "yes", &mut c);
        assert_eq!(c.verdict, Vote::Support);
        assert_eq!(c.confidence, 0.9);
    }

    #[test]
    fn test_exclusion_falls_through() {
        let mut c = Classification::neutral("yes and no");
        apply_first_match(RULES, "yes and no", &mut c);
        assert_eq!(c.verdict, Vote::Contradict);
        assert_eq!(c.confidence, DEFAULT_CONFIDENCE);
    }

    #[test]
    fn test_no_match_keeps_defaults() {
        let mut c = Classification::neutral("maybe");
        apply_first_match(RULES, "maybe", &mut c);
        assert_eq!(c, Classification::neutral("maybe"));
    }
}
