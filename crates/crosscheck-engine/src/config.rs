//! Configuration for the engine

use crosscheck_domain::{AggregationPolicy, DEFAULT_MAX_SOURCES};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-provider citation cap
pub const DEFAULT_SOURCES_PER_PROVIDER: usize = 3;

/// Configuration for the [`FactChecker`](crate::FactChecker)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Per-provider timeout in seconds. `None` waits indefinitely.
    #[serde(default)]
    pub provider_timeout_secs: Option<u64>,

    /// Maximum merged sources in a verdict
    #[serde(default = "default_max_sources")]
    pub max_sources: usize,

    /// Citations kept from each provider
    #[serde(default = "default_sources_per_provider")]
    pub sources_per_provider: usize,
}

fn default_max_sources() -> usize {
    DEFAULT_MAX_SOURCES
}

fn default_sources_per_provider() -> usize {
    DEFAULT_SOURCES_PER_PROVIDER
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            provider_timeout_secs: None,
            max_sources: DEFAULT_MAX_SOURCES,
            sources_per_provider: DEFAULT_SOURCES_PER_PROVIDER,
        }
    }
}

impl EngineConfig {
    /// Per-provider timeout as a Duration
    pub fn provider_timeout(&self) -> Option<Duration> {
        self.provider_timeout_secs.map(Duration::from_secs)
    }

    /// Aggregation tunables derived from this config
    pub fn aggregation_policy(&self) -> AggregationPolicy {
        AggregationPolicy {
            max_sources: self.max_sources,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_sources == 0 {
            return Err("max_sources must be greater than 0".to_string());
        }
        if self.sources_per_provider == 0 {
            return Err("sources_per_provider must be greater than 0".to_string());
        }
        if self.provider_timeout_secs == Some(0) {
            return Err("provider_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.provider_timeout(), None);
        assert_eq!(config.max_sources, 5);
        assert_eq!(config.sources_per_provider, 3);
    }

    #[test]
    fn test_timeout_conversion() {
        let config = EngineConfig {
            provider_timeout_secs: Some(30),
            ..EngineConfig::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.provider_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_invalid_values() {
        let mut config = EngineConfig::default();
        config.max_sources = 0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.provider_timeout_secs = Some(0);
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.sources_per_provider = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig {
            provider_timeout_secs: Some(30),
            max_sources: 4,
            ..EngineConfig::default()
        };
        let toml_str = config.to_toml().unwrap();
        let parsed = EngineConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = EngineConfig::from_toml("provider_timeout_secs = 10").unwrap();
        assert_eq!(parsed.provider_timeout_secs, Some(10));
        assert_eq!(parsed.max_sources, DEFAULT_MAX_SOURCES);
    }
}
