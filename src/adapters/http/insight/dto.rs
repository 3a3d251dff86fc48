//! Data transfer objects for the insight endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::insight::SummaryInput;

/// Request body of `POST /api/ai/pergunta`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AskQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
}

/// Response of `POST /api/ai/pergunta`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskQuestionResponse {
    pub resposta: String,
}

/// Request body of `POST /api/ai/resumointeligente`; the frontend passes
/// back whatever series it previously fetched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub startups: Option<Value>,
    #[serde(default)]
    pub industria: Option<Value>,
    #[serde(default)]
    pub investimento: Option<Value>,
}

impl From<SummaryRequest> for SummaryInput {
    fn from(request: SummaryRequest) -> Self {
        Self {
            startups: request.startups,
            industry: request.industria,
            investment: request.investimento,
        }
    }
}

/// Response of `POST /api/ai/resumointeligente`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub resumo: String,
}
