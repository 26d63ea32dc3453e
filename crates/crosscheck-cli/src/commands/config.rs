//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs, ProviderArg};
use crate::config::{mask_key, Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use serde_json::json;
use std::path::Path;

/// Execute the config command.
///
/// `stored` is the file contents; `effective` additionally carries
/// environment overrides and is only used for display.
pub async fn execute_config(
    args: ConfigArgs,
    stored: &mut Config,
    effective: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(effective, path, formatter),
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::SetKey { provider, key } => set_key(stored, provider, &key, path, formatter),
    }
}

/// Show the effective configuration with masked keys.
fn show_config(config: &Config, path: &Path, formatter: &Formatter) -> Result<()> {
    let exa = config.credentials.exa_api_key.as_deref().map(mask_key);
    let perplexity = config.credentials.perplexity_api_key.as_deref().map(mask_key);

    if formatter.format() == OutputFormat::Json {
        let value = json!({
            "path": path.display().to_string(),
            "credentials": {"exa_api_key": exa, "perplexity_api_key": perplexity},
            "providers": {
                "exa_weight": config.providers.exa_weight,
                "perplexity_weight": config.providers.perplexity_weight,
                "perplexity_model": config.providers.perplexity_model,
            },
            "engine": {
                "provider_timeout_secs": config.engine.provider_timeout_secs,
                "max_sources": config.engine.max_sources,
                "sources_per_provider": config.engine.sources_per_provider,
            }
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let unset = || "(not set)".to_string();
    println!("Config file: {}", path.display());
    println!("  Exa API key:        {}", exa.unwrap_or_else(unset));
    println!("  Perplexity API key: {}", perplexity.unwrap_or_else(unset));
    println!("  Exa weight:         {:.2}", config.providers.exa_weight);
    println!("  Perplexity weight:  {:.2}", config.providers.perplexity_weight);
    println!("  Perplexity model:   {}", config.providers.perplexity_model);
    match config.engine.provider_timeout_secs {
        Some(secs) => println!("  Provider timeout:   {}s", secs),
        None => println!("  Provider timeout:   none"),
    }
    println!("  Max sources:        {}", config.engine.max_sources);

    if config.credentials.exa_api_key.is_none() || config.credentials.perplexity_api_key.is_none() {
        println!("{}", formatter.info("Use `crosscheck config set-key <provider> <key>` to add a key"));
    }

    Ok(())
}

/// Store an API key and persist the file.
fn set_key(config: &mut Config, provider: ProviderArg, key: &str, path: &Path, formatter: &Formatter) -> Result<()> {
    config.set_key(provider, key)?;
    config.save_to(path)?;

    let name = match provider {
        ProviderArg::Exa => crosscheck_providers::exa::PROVIDER_NAME,
        ProviderArg::Perplexity => crosscheck_providers::perplexity::PROVIDER_NAME,
    };
    println!("{}", formatter.success(&format!("Saved {} API key", name)));
    Ok(())
}
