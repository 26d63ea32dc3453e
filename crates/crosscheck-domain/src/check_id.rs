//! Fact-check identifiers

use std::fmt;

/// Identifier for a single fact-check request, based on UUIDv7
///
/// Check ids are never persisted. They exist so that log lines emitted by
/// concurrent provider calls can be correlated with the verdict they fed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CheckId(u128);

impl CheckId {
    /// Generate a new UUIDv7-based CheckId
    ///
    /// # Examples
    ///
    /// ```
    /// use crosscheck_domain::CheckId;
    ///
    /// let id = CheckId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Short prefix for log lines and tables
    pub fn short(&self) -> String {
        self.to_string()[..8].to_string()
    }
}

impl Default for CheckId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_uuid() {
        let id = CheckId::new();
        let text = id.to_string();
        assert_eq!(text.len(), 36);
        assert!(text.starts_with(&id.short()));
    }

    #[test]
    fn test_ids_are_ordered_by_creation() {
        let first = CheckId::new();
        let second = CheckId::new();
        assert!(first <= second);
        assert_eq!(first.short().len(), 8);
    }
}
