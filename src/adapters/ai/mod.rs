//! AI adapters - Gemini client and the mock used in tests.

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use mock_provider::{MockAiProvider, MockError, RecordedCall};
