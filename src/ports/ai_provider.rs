//! AI Provider Port - Interface for the generative-AI endpoint.
//!
//! This port abstracts the single interaction the dashboard has with its AI
//! collaborator: send a prompt (optionally constrained by a response schema),
//! receive JSON matching that schema or fail.
//!
//! # Design
//!
//! - `generate_json` for schema-constrained calls; the returned value is the
//!   model's text payload parsed as JSON.
//! - `generate_text` for unconstrained calls (free-text summaries).
//! - Error types for the failure modes the route handlers care about; only
//!   rate limiting is retryable.

use async_trait::async_trait;
use serde_json::Value;

/// Port for generative-AI interactions.
///
/// Implementations connect to the external AI service and translate between
/// the provider-specific wire format and plain JSON values.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Generate JSON constrained by a response schema.
    ///
    /// The schema uses the provider's schema dialect (`type: "OBJECT"` etc.)
    /// and is passed through verbatim.
    async fn generate_json(&self, prompt: &str, schema: Value) -> Result<Value, AiError>;

    /// Generate free-form text with no schema constraint.
    async fn generate_text(&self, prompt: &str) -> Result<String, AiError>;
}

/// AI provider errors.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// The response carried no text payload.
    #[error("response contained no JSON payload")]
    EmptyResponse,

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl AiError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if this error is retryable.
    ///
    /// Only rate limiting is retried; every other failure fails the call.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AiError::RateLimited { .. })
    }
}
