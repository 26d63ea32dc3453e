//! Normalize provider citation lists into sources

use crosscheck_domain::Source;
use serde_json::Value;
use tracing::debug;

/// Citations kept per provider
pub const DEFAULT_SOURCES_PER_PROVIDER: usize = 3;

/// Map a provider's citation array into sources
///
/// Only the first `limit` entries are considered. Each entry is an object with
/// a `url` and optional `title`. A missing title falls back to the URL.
/// Snippets are read only from `snippet_key`; with `None` every source has no
/// snippet, and a snippet field that is present but not a string becomes an
/// empty snippet. Entries without a URL have no identity and are dropped.
/// Absent or non-array input yields no sources.
pub fn normalize_sources(raw: Option<&Value>, limit: usize, snippet_key: Option<&str>) -> Vec<Source> {
    let Some(entries) = raw.and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .take(limit)
        .enumerate()
        .filter_map(|(idx, entry)| {
            let source = parse_citation(entry, snippet_key);
            if source.is_none() {
                debug!("Skipping citation {} without a url", idx);
            }
            source
        })
        .collect()
}

fn parse_citation(entry: &Value, snippet_key: Option<&str>) -> Option<Source> {
    let obj = entry.as_object()?;

    let url = obj
        .get("url")
        .and_then(Value::as_str)
        .filter(|u| !u.is_empty())?
        .to_string();

    let name = obj
        .get("title")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| url.clone());

    let snippet = snippet_key
        .and_then(|key| obj.get(key))
        .map(|v| v.as_str().unwrap_or_default().to_string());

    Some(Source { name, url, snippet })
}
