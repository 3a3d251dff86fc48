//! Gemini Provider - Implementation of AiProvider for Google's Gemini API.
//!
//! Calls the `generateContent` endpoint with an optional response schema so
//! the model answers in `application/json` matching that schema.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-2.5-flash-preview-05-20")
//!     .with_base_url("https://generativelanguage.googleapis.com");
//!
//! let provider = GeminiProvider::new(config);
//! ```
//!
//! # Retry
//!
//! Only HTTP 429 is retried: exponential backoff starting at one second,
//! doubling per attempt, with up to a second of random jitter. Every other
//! failure fails the call immediately.

use async_trait::async_trait;
use rand::Rng;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

use crate::config::AiConfig;
use crate::ports::{AiError, AiProvider};

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key, sent as the `key` query parameter.
    api_key: Secret<String>,
    /// Model to use (e.g., "gemini-2.5-flash-preview-05-20").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries after a rate-limited attempt.
    pub max_retries: u32,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-2.5-flash-preview-05-20".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(60),
            max_retries: 4,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl From<&AiConfig> for GeminiConfig {
    fn from(config: &AiConfig) -> Self {
        GeminiConfig::new(config.gemini_api_key.clone().unwrap_or_default())
            .with_model(config.model.clone())
            .with_base_url(config.base_url.clone())
            .with_timeout(config.timeout())
            .with_max_retries(config.max_retries)
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the generateContent endpoint URL.
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Builds the request payload for a prompt, optionally constrained by a
    /// response schema.
    fn request_payload(prompt: &str, schema: Option<Value>) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: schema.map(|response_schema| GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        }
    }

    /// Sends a request and maps transport failures.
    async fn send_request(&self, payload: &GenerateContentRequest) -> Result<Response, AiError> {
        self.client
            .post(self.generate_url())
            .query(&[("key", self.config.api_key())])
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AiError::network(format!("Connection failed: {}", e))
                } else {
                    AiError::network(e.to_string())
                }
            })
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, AiError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u32>().ok());
        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(AiError::AuthenticationFailed),
            429 => Err(AiError::rate_limited(retry_after.unwrap_or(1))),
            400 => Err(AiError::InvalidRequest(error_body)),
            500..=599 => Err(AiError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(AiError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Extracts the model's text payload from a successful response.
    async fn payload_text(&self, response: Response) -> Result<String, AiError> {
        let response = self.handle_response_status(response).await?;

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AiError::parse(format!("Failed to parse response: {}", e)))?;

        first_text(body).ok_or(AiError::EmptyResponse)
    }

    /// Runs one prompt through the retry loop and returns the text payload.
    async fn call(&self, prompt: &str, schema: Option<Value>) -> Result<String, AiError> {
        let payload = Self::request_payload(prompt, schema);
        let mut attempt = 0;

        loop {
            let result = match self.send_request(&payload).await {
                Ok(response) => self.payload_text(response).await,
                Err(err) => Err(err),
            };

            match result {
                Ok(text) => return Ok(text),
                Err(err) if err.is_retryable() && attempt < self.config.max_retries => {
                    let delay = backoff_delay(attempt);
                    warn!(
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        "Gemini request rate limited, retrying"
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate_json(&self, prompt: &str, schema: Value) -> Result<Value, AiError> {
        let text = self.call(prompt, Some(schema)).await?;
        serde_json::from_str(&text)
            .map_err(|e| AiError::parse(format!("Model returned invalid JSON: {}", e)))
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, AiError> {
        self.call(prompt, None).await
    }
}

/// Backoff before retry `attempt` (0-based): `2^attempt` seconds plus up to
/// a second of random jitter.
fn backoff_delay(attempt: u32) -> Duration {
    let base = Duration::from_secs(1u64 << attempt.min(6));
    let jitter = Duration::from_millis(rand::thread_rng().gen_range(0..1000));
    base + jitter
}

/// Pulls the first candidate's first text part out of a response.
fn first_text(body: GenerateContentResponse) -> Option<String> {
    body.candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .find_map(|part| part.text)
}

// ----- Gemini API Types -----

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_builder_works() {
        let config = GeminiConfig::new("test-key")
            .with_model("gemini-2.0-flash")
            .with_base_url("https://custom.api.com")
            .with_timeout(Duration::from_secs(30))
            .with_max_retries(2);

        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.base_url, "https://custom.api.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn config_from_app_config() {
        let app = AiConfig {
            gemini_api_key: Some("AIza-xxx".to_string()),
            model: "gemini-2.0-flash".to_string(),
            timeout_secs: 15,
            max_retries: 1,
            ..Default::default()
        };
        let config = GeminiConfig::from(&app);

        assert_eq!(config.api_key(), "AIza-xxx");
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.max_retries, 1);
    }

    #[test]
    fn generate_url_includes_model() {
        let provider = GeminiProvider::new(GeminiConfig::new("k").with_model("gemini-2.0-flash"));
        assert_eq!(
            provider.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn payload_with_schema_sets_generation_config() {
        let payload = GeminiProvider::request_payload(
            "Gere dados.",
            Some(json!({"type": "OBJECT", "properties": {}})),
        );
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "Gere dados.");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn payload_without_schema_omits_generation_config() {
        let payload = GeminiProvider::request_payload("Gere um resumo.", None);
        let value = serde_json::to_value(&payload).unwrap();

        assert!(value.get("generationConfig").is_none());
    }

    #[test]
    fn first_text_extracts_payload() {
        let body: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "{\"resposta\": \"ok\"}"}]
                },
                "finishReason": "STOP"
            }]
        }))
        .unwrap();

        assert_eq!(first_text(body).as_deref(), Some("{\"resposta\": \"ok\"}"));
    }

    #[test]
    fn first_text_handles_missing_candidates() {
        let body: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(first_text(body).is_none());

        let body: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": []}}]
        }))
        .unwrap();
        assert!(first_text(body).is_none());
    }

    #[test]
    fn backoff_doubles_with_bounded_jitter() {
        for attempt in 0..3 {
            let delay = backoff_delay(attempt);
            let base = Duration::from_secs(1 << attempt);
            assert!(delay >= base);
            assert!(delay < base + Duration::from_secs(1));
        }
    }
}
