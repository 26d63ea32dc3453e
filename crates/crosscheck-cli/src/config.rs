//! Configuration management for the CLI.
//!
//! Credentials live in `~/.crosscheck/config.toml` and may be overridden by
//! the `EXA_API_KEY` and `PERPLEXITY_API_KEY` environment variables.

use crate::cli::ProviderArg;
use crate::error::{CliError, Result};
use crosscheck_engine::{EngineConfig, EngineError};
use crosscheck_providers::{ExaProvider, PerplexityProvider, ProviderConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Environment variable holding the Exa key
pub const ENV_EXA_API_KEY: &str = "EXA_API_KEY";

/// Environment variable holding the Perplexity key
pub const ENV_PERPLEXITY_API_KEY: &str = "PERPLEXITY_API_KEY";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API keys
    #[serde(default)]
    pub credentials: Credentials,

    /// Provider tuning
    #[serde(default)]
    pub providers: ProviderSettings,

    /// Engine tuning
    #[serde(default)]
    pub engine: EngineConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// API credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    /// Exa API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exa_api_key: Option<String>,

    /// Perplexity API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perplexity_api_key: Option<String>,
}

/// Per-provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Aggregation weight of the Exa provider
    #[serde(default = "default_exa_weight")]
    pub exa_weight: f64,

    /// Aggregation weight of the Perplexity provider
    #[serde(default = "default_perplexity_weight")]
    pub perplexity_weight: f64,

    /// Exa endpoint override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exa_base_url: Option<String>,

    /// Perplexity endpoint override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perplexity_base_url: Option<String>,

    /// Perplexity model
    #[serde(default = "default_perplexity_model")]
    pub perplexity_model: String,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".crosscheck").join("config.toml"))
    }

    /// Load configuration from a file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Override credentials from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|name| std::env::var(name).ok());
    }

    /// Override credentials from an arbitrary variable lookup.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(key) = non_empty(ENV_EXA_API_KEY) {
            self.credentials.exa_api_key = Some(key);
        }
        if let Some(key) = non_empty(ENV_PERPLEXITY_API_KEY) {
            self.credentials.perplexity_api_key = Some(key);
        }
    }

    /// Store a trimmed API key for one provider.
    pub fn set_key(&mut self, provider: ProviderArg, key: &str) -> Result<()> {
        let key = key.trim();
        if key.is_empty() {
            return Err(CliError::InvalidInput("API key must not be empty".to_string()));
        }

        let slot = match provider {
            ProviderArg::Exa => &mut self.credentials.exa_api_key,
            ProviderArg::Perplexity => &mut self.credentials.perplexity_api_key,
        };
        *slot = Some(key.to_string());
        Ok(())
    }

    /// Build the provider list, in aggregation order.
    ///
    /// Fails with [`EngineError::MissingCredentials`] naming every provider
    /// that has no key.
    pub fn build_providers(&self) -> std::result::Result<Vec<ProviderConfig>, EngineError> {
        let settings = &self.providers;
        let limit = self.engine.sources_per_provider;

        let mut missing = Vec::new();
        if self.credentials.exa_api_key.is_none() {
            missing.push(crosscheck_providers::exa::PROVIDER_NAME.to_string());
        }
        if self.credentials.perplexity_api_key.is_none() {
            missing.push(crosscheck_providers::perplexity::PROVIDER_NAME.to_string());
        }

        let (Some(exa_key), Some(perplexity_key)) = (
            self.credentials.exa_api_key.as_deref(),
            self.credentials.perplexity_api_key.as_deref(),
        ) else {
            return Err(EngineError::MissingCredentials(missing));
        };

        let mut exa = ExaProvider::new(exa_key).with_source_limit(limit);
        if let Some(url) = &settings.exa_base_url {
            exa = exa.with_base_url(url.as_str());
        }

        let mut perplexity = PerplexityProvider::new(perplexity_key)
            .with_model(settings.perplexity_model.as_str())
            .with_source_limit(limit);
        if let Some(url) = &settings.perplexity_base_url {
            perplexity = perplexity.with_base_url(url.as_str());
        }

        Ok(vec![
            ProviderConfig::new(Arc::new(exa), settings.exa_weight),
            ProviderConfig::new(Arc::new(perplexity), settings.perplexity_weight),
        ])
    }
}

/// Mask a secret for display, keeping the last four characters.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), tail)
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            exa_weight: default_exa_weight(),
            perplexity_weight: default_perplexity_weight(),
            exa_base_url: None,
            perplexity_base_url: None,
            perplexity_model: default_perplexity_model(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_exa_weight() -> f64 {
    0.4
}

fn default_perplexity_weight() -> f64 {
    0.6
}

fn default_perplexity_model() -> String {
    crosscheck_providers::perplexity::DEFAULT_MODEL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
