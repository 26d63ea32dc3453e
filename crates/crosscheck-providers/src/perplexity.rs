//! Perplexity chat provider
//!
//! Sends the claim to the chat-completions API with a fact-checker system
//! prompt and classifies the reply with the chat keyword rules, honouring any
//! confidence figure the model states.

use crate::{EvidenceProvider, ProviderError};
use crosscheck_classifier::{classify, normalize_sources, DEFAULT_SOURCES_PER_PROVIDER};
use crosscheck_domain::{Claim, EvidenceSignal};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default Perplexity API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";

/// Default model
pub const DEFAULT_MODEL: &str = "sonar";

/// Display name used in explanations and details
pub const PROVIDER_NAME: &str = "Perplexity AI";

const SYSTEM_PROMPT: &str = "You are a fact-checker. Analyze the given statement for factual accuracy. \
Respond with: 1) TRUE/FALSE/UNCERTAIN, 2) Confidence level (0-1), 3) Brief explanation, \
4) Key sources if available. Be concise and precise.";

const MAX_TOKENS: u32 = 200;
const PROBE_MAX_TOKENS: u32 = 10;
const TEMPERATURE: f32 = 0.1;

/// Perplexity chat-completions provider
pub struct PerplexityProvider {
    api_key: String,
    base_url: String,
    model: String,
    source_limit: usize,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    search_results: Option<Value>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

impl PerplexityProvider {
    /// Create a provider against the public endpoint with the default model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            source_limit: DEFAULT_SOURCES_PER_PROVIDER,
        }
    }

    /// Point at a different endpoint (proxies, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Use a different model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set how many search results are kept as sources
    pub fn with_source_limit(mut self, limit: usize) -> Self {
        self.source_limit = limit;
        self
    }

    /// Model in use
    pub fn model(&self) -> &str {
        &self.model
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn post(&self, client: &reqwest::Client, body: &ChatRequest<'_>) -> reqwest::RequestBuilder {
        client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(body)
    }
}

impl EvidenceProvider for PerplexityProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn build_request(&self, client: &reqwest::Client, claim: &Claim) -> reqwest::RequestBuilder {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("Please fact-check this statement: \"{}\"", claim.text()),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: Some(TEMPERATURE),
        };

        self.post(client, &body)
    }

    fn parse_response(&self, body: &str) -> Result<EvidenceSignal, ProviderError> {
        let response: ChatResponse = serde_json::from_str(body)?;

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::InvalidResponse("Response has no choices".to_string()))?;

        let classification = classify(&content);
        let sources = normalize_sources(response.search_results.as_ref(), self.source_limit, None);

        Ok(EvidenceSignal::new(
            classification.verdict,
            classification.confidence,
            classification.explanation,
        )
        .with_sources(sources)
        .with_raw(body))
    }

    fn probe_request(&self, client: &reqwest::Client) -> reqwest::RequestBuilder {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: "Test message".to_string(),
            }],
            max_tokens: PROBE_MAX_TOKENS,
            temperature: None,
        };

        self.post(client, &body)
    }
}
