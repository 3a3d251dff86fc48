//! Application layer - one handler per API operation.
//!
//! Each handler owns its prompt text and response schema, calls the AI
//! provider port and reshapes the loosely-typed result into domain records.

pub mod insight;
pub mod stats;

use crate::ports::AiError;

/// Failure of an AI-backed fetch operation.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The provider call itself failed.
    #[error("AI provider error: {0}")]
    Provider(#[from] AiError),

    /// The provider answered, but not in the requested shape.
    #[error("AI response did not match the expected shape: {0}")]
    Shape(String),

    /// The provider answered with an empty data set.
    #[error("AI response contained no usable data")]
    Empty,
}

impl FetchError {
    /// Creates a shape error from any displayable cause.
    pub fn shape(cause: impl std::fmt::Display) -> Self {
        Self::Shape(cause.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_convert() {
        let err: FetchError = AiError::EmptyResponse.into();
        assert!(matches!(err, FetchError::Provider(AiError::EmptyResponse)));
    }

    #[test]
    fn shape_error_keeps_cause() {
        let err = FetchError::shape("missing field `ano`");
        assert_eq!(
            err.to_string(),
            "AI response did not match the expected shape: missing field `ano`"
        );
    }
}
