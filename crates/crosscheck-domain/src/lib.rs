//! Crosscheck Domain Layer
//!
//! This crate contains the data model for multi-source fact checking and the
//! deterministic aggregation policy that turns per-provider evidence into a
//! single verdict. Apart from `uuid` for check identifiers it has no external
//! dependencies: no I/O, no async, no HTTP.
//!
//! ## Key Concepts
//!
//! - **Claim**: the trimmed statement being fact-checked
//! - **EvidenceSignal**: one provider's vote, confidence, citations and reasoning
//! - **Source**: a citation, identified by its exact URL
//! - **CombinedVerdict**: the aggregated result handed to the presentation layer
//!
//! ## Flow
//!
//! ```text
//! Claim → [provider → EvidenceSignal] × N → combine() → CombinedVerdict
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregation;
pub mod check_id;
pub mod claim;
pub mod signal;
pub mod verdict;

// Re-exports for convenience
pub use aggregation::{
    combine, merge_sources, resolve_stance, weighted_confidence, AggregationPolicy, Stance,
    DEFAULT_MAX_SOURCES,
};
pub use check_id::CheckId;
pub use claim::{Claim, ClaimError};
pub use signal::{EvidenceSignal, Source, Vote, FAILURE_CONFIDENCE};
pub use verdict::{CombinedVerdict, ConfidenceRating, ProviderReport, VerdictStatus};
