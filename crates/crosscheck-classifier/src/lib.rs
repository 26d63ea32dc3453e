//! Crosscheck Classifier
//!
//! Turns a provider's free-text output into a discrete stance with a
//! confidence, and turns its citation list into normalized [`Source`]s.
//!
//! Classification is purely lexical: lower-cased substring checks evaluated as
//! an ordered rule list, first match wins. No model is involved.
//!
//! # Variants
//!
//! - [`classify`]: for chat completions that state TRUE/FALSE/UNCERTAIN and
//!   may quote a confidence figure
//! - [`classify_answer`]: for answer-style providers that return a prose
//!   answer plus citations; applies the trusted-domain [reliability boost]
//!
//! # Example
//!
//! ```
//! use crosscheck_classifier::classify;
//! use crosscheck_domain::Vote;
//!
//! let c = classify("This is TRUE and confirmed, confidence 0.85");
//! assert_eq!(c.verdict, Vote::Support);
//! assert_eq!(c.confidence, 0.85);
//! ```
//!
//! [`Source`]: crosscheck_domain::Source
//! [reliability boost]: apply_reliability_boost

#![warn(missing_docs)]

mod answer;
mod chat;
mod rules;
mod sources;

pub use answer::{apply_reliability_boost, classify_answer, RELIABILITY_BOOST, TRUSTED_DOMAINS};
pub use chat::{classify, extract_confidence};
pub use rules::{Classification, KeywordRule};
pub use sources::{normalize_sources, DEFAULT_SOURCES_PER_PROVIDER};
