//! Claim module - the statement under test

use std::fmt;

/// Errors raised when constructing a claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimError {
    /// The text was empty or whitespace only
    Empty,
}

impl fmt::Display for ClaimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimError::Empty => write!(f, "claim text is empty"),
        }
    }
}

impl std::error::Error for ClaimError {}

/// A natural-language claim to be fact-checked
///
/// The text is trimmed of surrounding whitespace on construction and is
/// guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    text: String,
}

impl Claim {
    /// Create a claim from raw selected text
    ///
    /// # Examples
    ///
    /// ```
    /// use crosscheck_domain::Claim;
    ///
    /// let claim = Claim::new("  Water boils at 100C at sea level.\n").unwrap();
    /// assert_eq!(claim.text(), "Water boils at 100C at sea level.");
    /// assert!(Claim::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, ClaimError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ClaimError::Empty);
        }
        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    /// The trimmed claim text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Truncated form for display, cut on a char boundary
    pub fn preview(&self, max_chars: usize) -> String {
        if self.text.chars().count() <= max_chars {
            return self.text.clone();
        }
        let cut: String = self.text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
