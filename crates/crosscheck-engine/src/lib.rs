//! Crosscheck Engine
//!
//! Runs a fact check end to end: every configured provider is queried
//! concurrently, each provider's outcome is folded into an evidence signal
//! (failures included), and the signals are aggregated into a verdict.
//!
//! # Architecture
//!
//! ```text
//! claim → FactChecker → [build_signal × N, joined] → combine → CombinedVerdict
//! ```
//!
//! # Failure model
//!
//! - A provider that errors, times out, or returns garbage contributes a
//!   neutral signal at confidence 0.1; the other providers' evidence stands.
//! - Bad caller input (empty claim, no providers, invalid weights, missing
//!   credentials) is an [`EngineError`], which [`FactChecker::check`] turns
//!   into a structured error verdict.
//!
//! # Example Usage
//!
//! ```no_run
//! use crosscheck_engine::{EngineConfig, FactChecker};
//! use crosscheck_providers::{ExaProvider, PerplexityProvider, ProviderConfig};
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let checker = FactChecker::new(EngineConfig::default());
//! let providers = vec![
//!     ProviderConfig::new(Arc::new(ExaProvider::new("exa-key")), 0.4),
//!     ProviderConfig::new(Arc::new(PerplexityProvider::new("pplx-key")), 0.6),
//! ];
//!
//! let verdict = checker.check("The Great Wall is visible from space", &providers).await;
//! println!("{}: {} ({})", verdict.title, verdict.description, verdict.confidence);
//! # }
//! ```

#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod orchestrator;
mod probe;

pub use builder::build_signal;
pub use config::EngineConfig;
pub use error::EngineError;
pub use orchestrator::FactChecker;
pub use probe::ProbeOutcome;
