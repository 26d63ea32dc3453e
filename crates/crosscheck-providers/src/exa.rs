//! Exa answer provider
//!
//! Exa's `/answer` endpoint runs a search and returns a prose answer with the
//! citations it was drawn from. The answer is classified with the
//! answer-style keyword rules and boosted when a trusted domain is cited.

use crate::{EvidenceProvider, ProviderError};
use crosscheck_classifier::{classify_answer, normalize_sources, DEFAULT_SOURCES_PER_PROVIDER};
use crosscheck_domain::{Claim, EvidenceSignal};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default Exa API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.exa.ai";

/// Display name used in explanations and details
pub const PROVIDER_NAME: &str = "Exa Labs";

/// Exa answer provider
pub struct ExaProvider {
    api_key: String,
    base_url: String,
    source_limit: usize,
}

/// Request body for the answer API
#[derive(Serialize)]
struct AnswerRequest {
    query: String,
    text: bool,
}

/// Response from the answer API
#[derive(Deserialize)]
struct AnswerResponse {
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    citations: Option<Value>,
}

impl ExaProvider {
    /// Create a provider against the public endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            source_limit: DEFAULT_SOURCES_PER_PROVIDER,
        }
    }

    /// Point at a different endpoint (proxies, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set how many citations are kept
    pub fn with_source_limit(mut self, limit: usize) -> Self {
        self.source_limit = limit;
        self
    }

    fn answer_url(&self) -> String {
        format!("{}/answer", self.base_url)
    }
}

impl EvidenceProvider for ExaProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn build_request(&self, client: &reqwest::Client, claim: &Claim) -> reqwest::RequestBuilder {
        let body = AnswerRequest {
            query: format!("Fact-check this statement: \"{}\"", claim.text()),
            text: true,
        };

        client
            .post(self.answer_url())
            .header("x-api-key", &self.api_key)
            .json(&body)
    }

    fn parse_response(&self, body: &str) -> Result<EvidenceSignal, ProviderError> {
        let response: AnswerResponse = serde_json::from_str(body)?;

        let sources: Vec<_> = normalize_sources(response.citations.as_ref(), self.source_limit, Some("text"))
            .into_iter()
            .map(|mut source| {
                source.snippet.get_or_insert_with(String::new);
                source
            })
            .collect();

        let answer = response.answer.unwrap_or_default();
        let classification = classify_answer(&answer, &sources);

        Ok(EvidenceSignal::new(
            classification.verdict,
            classification.confidence,
            classification.explanation,
        )
        .with_sources(sources)
        .with_raw(body))
    }

    fn probe_request(&self, client: &reqwest::Client) -> reqwest::RequestBuilder {
        let body = AnswerRequest {
            query: "test query".to_string(),
            text: false,
        };

        client
            .post(self.answer_url())
            .header("x-api-key", &self.api_key)
            .json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosscheck_domain::Vote;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_base_url_trailing_slash() {
        let provider = ExaProvider::new("k").with_base_url("http://localhost:1234/");
        assert_eq!(provider.answer_url(), "http://localhost:1234/answer");
    }

    #[test]
    fn test_parse_supporting_answer_with_trusted_source() {
        let provider = ExaProvider::new("k");
        let body = json!({
            "answer": "Yes, this is accurate.",
            "citations": [
                {"title": "Eiffel Tower", "url": "https://en.wikipedia.org/wiki/Eiffel_Tower", "text": "The Eiffel Tower is..."},
                {"url": "https://travel.example.com/paris"}
            ]
        })
        .to_string();

        let signal = provider.parse_response(&body).unwrap();
        assert_eq!(signal.vote, Vote::Support);
        assert!((signal.confidence - 0.9).abs() < 1e-9);
        assert_eq!(signal.sources.len(), 2);
        assert_eq!(signal.sources[1].name, "https://travel.example.com/paris");
        assert_eq!(signal.sources[1].snippet.as_deref(), Some(""));
        assert_eq!(signal.reasoning, "Yes, this is accurate.");
        assert_eq!(signal.raw, body);
    }

    #[test]
    fn test_parse_missing_answer() {
        let provider = ExaProvider::new("k");
        let signal = provider.parse_response("{}").unwrap();
        assert_eq!(signal.vote, Vote::Neutral);
        assert_eq!(signal.confidence, 0.5);
        assert!(signal.sources.is_empty());
    }

    #[test]
    fn test_citation_snippet_comes_from_text_only() {
        let provider = ExaProvider::new("k");
        let body = json!({
            "answer": "correct",
            "citations": [
                {"title": "A", "url": "https://a.example", "snippet": "ignored"},
                {"title": "B", "url": "https://b.example", "text": "kept"}
            ]
        })
        .to_string();

        let signal = provider.parse_response(&body).unwrap();
        assert_eq!(signal.sources[0].snippet.as_deref(), Some(""));
        assert_eq!(signal.sources[1].snippet.as_deref(), Some("kept"));
    }

    #[test]
    fn test_parse_caps_citations() {
        let provider = ExaProvider::new("k").with_source_limit(2);
        let body = json!({
            "answer": "unclear",
            "citations": [
                {"url": "https://a.example"},
                {"url": "https://b.example"},
                {"url": "https://c.example"}
            ]
        })
        .to_string();

        let signal = provider.parse_response(&body).unwrap();
        assert_eq!(signal.sources.len(), 2);
        assert_eq!(signal.confidence, 0.4);
    }

    #[test]
    fn test_parse_malformed_body() {
        let provider = ExaProvider::new("k");
        let result = provider.parse_response("<html>bad gateway</html>");
        assert!(matches!(result, Err(ProviderError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_request_shape() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/answer"))
            .and(header("x-api-key", "exa-key"))
            .and(body_json(json!({
                "query": "Fact-check this statement: \"The sky is blue\"",
                "text": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "true"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = ExaProvider::new("exa-key").with_base_url(mock_server.uri());
        let client = reqwest::Client::new();
        let claim = Claim::new("The sky is blue").unwrap();

        let response = provider.build_request(&client, &claim).send().await.unwrap();
        assert!(response.status().is_success());
    }

    #[tokio::test]
    async fn test_probe_request_shape() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/answer"))
            .and(body_json(json!({"query": "test query", "text": false})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = ExaProvider::new("exa-key").with_base_url(mock_server.uri());
        let response = provider
            .probe_request(&reqwest::Client::new())
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
    }
}
