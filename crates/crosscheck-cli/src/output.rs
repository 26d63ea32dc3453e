//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crosscheck_domain::{CombinedVerdict, ProviderReport, Source, VerdictStatus};
use crosscheck_engine::ProbeOutcome;
use colored::*;
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::{Columns, Rows}, Alignment, Modify, Style, Width},
};

/// Reasoning column width in the provider table
const REASONING_WIDTH: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a fact-check verdict.
    pub fn format_verdict(&self, verdict: &CombinedVerdict) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&verdict_json(verdict))?),
            OutputFormat::Table => Ok(self.format_verdict_table(verdict)),
            OutputFormat::Quiet => Ok(format!("{} {:.2}", verdict.status, verdict.confidence)),
        }
    }

    /// Format credential probe results.
    pub fn format_probe(&self, outcomes: &[ProbeOutcome]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let items: Vec<Value> = outcomes
                    .iter()
                    .map(|o| json!({"provider": o.provider, "ok": o.is_ok(), "error": o.error}))
                    .collect();
                Ok(serde_json::to_string_pretty(&items)?)
            }
            OutputFormat::Table => Ok(self.format_probe_table(outcomes)),
            OutputFormat::Quiet => Ok(outcomes
                .iter()
                .map(|o| format!("{} {}", o.provider, if o.is_ok() { "ok" } else { "failed" }))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_verdict_table(&self, verdict: &CombinedVerdict) -> String {
        let mut out = String::new();

        out.push_str(&self.colorize(&verdict.title, status_color(verdict.status)));
        out.push('\n');
        out.push_str(&verdict.description);
        out.push('\n');

        if let Some(rating) = verdict.rating {
            out.push_str(&format!("Confidence: {:.2} ({})\n", verdict.confidence, rating));
        }

        if !verdict.claim.is_empty() {
            out.push_str(&format!("Claim: {}\n", verdict.claim));
        }

        if !verdict.details.is_empty() {
            out.push('\n');
            out.push_str(&details_table(&verdict.details));
            out.push('\n');
        } else if !verdict.explanation.is_empty() {
            out.push('\n');
            out.push_str(&verdict.explanation);
            out.push('\n');
        }

        if verdict.sources.is_empty() {
            if !verdict.is_error() {
                out.push('\n');
                out.push_str(&self.colorize("No sources found.", "yellow"));
                out.push('\n');
            }
        } else {
            out.push('\n');
            out.push_str(&sources_table(&verdict.sources));
            out.push('\n');
        }

        out.trim_end().to_string()
    }

    fn format_probe_table(&self, outcomes: &[ProbeOutcome]) -> String {
        outcomes
            .iter()
            .map(|o| match &o.error {
                None => self.success(&format!("{} API key accepted", o.provider)),
                Some(e) => self.error(e),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn status_color(status: VerdictStatus) -> &'static str {
    match status {
        VerdictStatus::True => "green",
        VerdictStatus::False | VerdictStatus::Error => "red",
        VerdictStatus::Uncertain => "yellow",
    }
}

fn details_table(details: &[ProviderReport]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Provider", "Weight", "Vote", "Confidence", "Reasoning"]);

    for report in details {
        builder.push_record([
            report.provider.clone(),
            format!("{:.2}", report.weight),
            report.signal.vote.to_string(),
            format!("{:.2}", report.signal.confidence),
            report.signal.reasoning.clone(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .with(Modify::new(Columns::single(4)).with(Width::wrap(REASONING_WIDTH)));

    table.to_string()
}

fn sources_table(sources: &[Source]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["#", "Source", "URL"]);

    for (i, source) in sources.iter().enumerate() {
        builder.push_record([(i + 1).to_string(), source.name.clone(), source.url.clone()]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// JSON representation of a verdict.
pub fn verdict_json(verdict: &CombinedVerdict) -> Value {
    let sources: Vec<Value> = verdict
        .sources
        .iter()
        .map(|s| json!({"name": s.name, "url": s.url, "snippet": s.snippet}))
        .collect();

    let details: Vec<Value> = verdict
        .details
        .iter()
        .map(|report| {
            json!({
                "provider": report.provider,
                "weight": report.weight,
                "verdict": report.signal.vote.as_str(),
                "confidence": report.signal.confidence,
                "reasoning": report.signal.reasoning,
                "failed": report.signal.is_failure(),
                "sources": report.signal.sources.iter().map(|s| s.url.as_str()).collect::<Vec<_>>()
            })
        })
        .collect();

    json!({
        "id": verdict.id.to_string(),
        "claim": verdict.claim,
        "status": verdict.status.as_str(),
        "title": verdict.title,
        "description": verdict.description,
        "explanation": verdict.explanation,
        "confidence": verdict.confidence,
        "rating": verdict.rating.map(|r| r.label()),
        "sources": sources,
        "details": details
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosscheck_domain::{CheckId, ConfidenceRating, EvidenceSignal, Vote};

    fn create_test_verdict() -> CombinedVerdict {
        let exa = EvidenceSignal::new(Vote::Support, 0.9, "This is correct.")
            .with_sources(vec![Source::new("Water", "https://en.wikipedia.org/wiki/Water")]);
        let pplx = EvidenceSignal::failed("Perplexity AI");

        CombinedVerdict {
            id: CheckId::new(),
            claim: "Water is wet".to_string(),
            status: VerdictStatus::True,
            title: "Possibly True".to_string(),
            description: "Some evidence supports this claim".to_string(),
            explanation: "Exa Labs: This is correct.. Perplexity AI: Perplexity AI failed".to_string(),
            sources: exa.sources.clone(),
            rating: Some(ConfidenceRating::Low),
            confidence: 0.42,
            details: vec![
                ProviderReport::new("Exa Labs", 0.4, exa),
                ProviderReport::new("Perplexity AI", 0.6, pplx),
            ],
        }
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_verdict(&create_test_verdict()).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["status"], "true");
        assert_eq!(value["rating"], "Low Confidence");
        assert_eq!(value["sources"][0]["url"], "https://en.wikipedia.org/wiki/Water");
        assert_eq!(value["details"][0]["provider"], "Exa Labs");
        assert_eq!(value["details"][1]["verdict"], "neutral");
        assert_eq!(value["details"][0]["failed"], false);
        assert_eq!(value["details"][1]["failed"], true);
    }

    #[test]
    fn test_json_error_verdict_has_null_rating() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let verdict = CombinedVerdict::failure("Fact-Check Failed", "Unable to verify this statement.", "");
        let value: Value = serde_json::from_str(&formatter.format_verdict(&verdict).unwrap()).unwrap();

        assert_eq!(value["status"], "error");
        assert!(value["rating"].is_null());
        assert_eq!(value["sources"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_verdict(&create_test_verdict()).unwrap();

        assert!(output.starts_with("Possibly True"));
        assert!(output.contains("Confidence: 0.42 (Low Confidence)"));
        assert!(output.contains("Exa Labs"));
        assert!(output.contains("https://en.wikipedia.org/wiki/Water"));
    }

    #[test]
    fn test_table_error_verdict() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let verdict = CombinedVerdict::failure(
            "Configuration Error",
            "Please configure all API keys.",
            "Provide an API key for Exa Labs.",
        );
        let output = formatter.format_verdict(&verdict).unwrap();

        assert!(output.contains("Configuration Error"));
        assert!(output.contains("Provide an API key for Exa Labs."));
        assert!(!output.contains("Confidence:"));
        assert!(!output.contains("No sources found."));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_verdict(&create_test_verdict()).unwrap();
        assert_eq!(output, "true 0.42");
    }

    #[test]
    fn test_probe_formats() {
        let outcomes = vec![
            ProbeOutcome {
                provider: "Exa Labs".to_string(),
                error: None,
            },
            ProbeOutcome {
                provider: "Perplexity AI".to_string(),
                error: Some("Perplexity AI API test failed: HTTP status 401".to_string()),
            },
        ];

        let quiet = Formatter::new(OutputFormat::Quiet, false).format_probe(&outcomes).unwrap();
        assert_eq!(quiet, "Exa Labs ok\nPerplexity AI failed");

        let table = Formatter::new(OutputFormat::Table, false).format_probe(&outcomes).unwrap();
        assert!(table.contains("✓ Exa Labs API key accepted"));
        assert!(table.contains("✗ Perplexity AI API test failed"));
    }

    #[test]
    fn test_color_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
