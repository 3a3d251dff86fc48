//! Mock AI Provider for testing.
//!
//! Provides a configurable mock implementation of the AiProvider port,
//! allowing tests to run without calling the real Gemini API.
//!
//! # Features
//!
//! - Pre-configured responses (consumed in order)
//! - Error injection for failure-path testing
//! - Call tracking for prompt/schema verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAiProvider::new()
//!     .with_json_response(json!({"resposta": "Tudo certo."}));
//!
//! let value = provider.generate_json("pergunta", schema).await?;
//! assert_eq!(value["resposta"], "Tudo certo.");
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{AiError, AiProvider};

/// Mock AI provider for testing.
#[derive(Debug, Clone, Default)]
pub struct MockAiProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
enum MockResponse {
    /// JSON value returned by `generate_json`.
    Json(Value),
    /// Text returned by `generate_text`.
    Text(String),
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
    /// Simulate a response with no text payload.
    EmptyResponse,
    /// Simulate unparsable model output.
    Parse { message: String },
}

impl From<MockError> for AiError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AiError::rate_limited(retry_after_secs),
            MockError::AuthenticationFailed => AiError::AuthenticationFailed,
            MockError::Unavailable { message } => AiError::unavailable(message),
            MockError::Network { message } => AiError::network(message),
            MockError::Timeout { timeout_secs } => AiError::Timeout { timeout_secs },
            MockError::EmptyResponse => AiError::EmptyResponse,
            MockError::Parse { message } => AiError::parse(message),
        }
    }
}

/// One recorded provider call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Prompt text passed by the caller.
    pub prompt: String,
    /// Response schema, `None` for free-text calls.
    pub schema: Option<Value>,
}

impl MockAiProvider {
    /// Creates a new mock provider with an empty response queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a JSON response to the queue.
    pub fn with_json_response(self, value: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Json(value));
        self
    }

    /// Adds a text response to the queue.
    pub fn with_text_response(self, text: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Text(text.into()));
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Error(error));
        self
    }

    /// Returns the calls made so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// True once every queued response has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.responses.lock().unwrap().is_empty()
    }

    fn record(&self, prompt: &str, schema: Option<&Value>) {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            schema: schema.cloned(),
        });
    }

    fn pop(&self) -> Result<MockResponse, AiError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AiError::unavailable("mock response queue is empty"))
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate_json(&self, prompt: &str, schema: Value) -> Result<Value, AiError> {
        self.record(prompt, Some(&schema));
        match self.pop()? {
            MockResponse::Json(value) => Ok(value),
            MockResponse::Text(text) => serde_json::from_str(&text)
                .map_err(|e| AiError::parse(format!("Model returned invalid JSON: {}", e))),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, AiError> {
        self.record(prompt, None);
        match self.pop()? {
            MockResponse::Text(text) => Ok(text),
            MockResponse::Json(value) => Ok(value.to_string()),
            MockResponse::Error(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn returns_queued_json_in_order() {
        let provider = MockAiProvider::new()
            .with_json_response(json!({"a": 1}))
            .with_json_response(json!({"b": 2}));

        let first = provider.generate_json("p1", json!({})).await.unwrap();
        let second = provider.generate_json("p2", json!({})).await.unwrap();

        assert_eq!(first["a"], 1);
        assert_eq!(second["b"], 2);
        assert!(provider.is_exhausted());
    }

    #[tokio::test]
    async fn returns_queued_error() {
        let provider = MockAiProvider::new().with_error(MockError::EmptyResponse);

        let err = provider.generate_json("p", json!({})).await.unwrap_err();
        assert!(matches!(err, AiError::EmptyResponse));
    }

    #[tokio::test]
    async fn empty_queue_is_an_error() {
        let provider = MockAiProvider::new();

        let err = provider.generate_text("p").await.unwrap_err();
        assert!(matches!(err, AiError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn records_prompt_and_schema() {
        let provider = MockAiProvider::new()
            .with_json_response(json!({}))
            .with_text_response("resumo");

        provider
            .generate_json("pergunta", json!({"type": "OBJECT"}))
            .await
            .unwrap();
        provider.generate_text("resuma isto").await.unwrap();

        let calls = provider.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].prompt, "pergunta");
        assert_eq!(calls[0].schema.as_ref().unwrap()["type"], "OBJECT");
        assert_eq!(calls[1].prompt, "resuma isto");
        assert!(calls[1].schema.is_none());
    }

    #[tokio::test]
    async fn text_response_parses_as_json_when_requested() {
        let provider = MockAiProvider::new().with_text_response("{\"ok\": true}");

        let value = provider.generate_json("p", json!({})).await.unwrap();
        assert_eq!(value["ok"], true);
    }
}
