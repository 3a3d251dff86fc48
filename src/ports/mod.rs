//! Ports - trait interfaces implemented by adapters.

mod ai_provider;

pub use ai_provider::{AiError, AiProvider};
