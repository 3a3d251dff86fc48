//! GenerateSummaryHandler - free-text summary of previously fetched series.

use std::sync::Arc;

use serde_json::Value;

use crate::application::FetchError;
use crate::ports::AiProvider;

/// Data fragments the dashboard already fetched, passed back for the
/// summary. Any subset may be present; the HTTP layer rejects the request
/// when all three are absent.
#[derive(Debug, Clone, Default)]
pub struct SummaryInput {
    pub startups: Option<Value>,
    pub industry: Option<Value>,
    pub investment: Option<Value>,
}

impl SummaryInput {
    /// True when no fragment was provided at all.
    pub fn is_empty(&self) -> bool {
        self.startups.is_none() && self.industry.is_none() && self.investment.is_none()
    }
}

fn prompt_for(input: &SummaryInput) -> String {
    let serialize = |fragment: &Option<Value>| {
        fragment
            .as_ref()
            .map(Value::to_string)
            .unwrap_or_else(|| "null".to_string())
    };

    format!(
        r#"Gere um resumo detalhado e inteligente sobre o cenário de startups no Brasil, considerando os seguintes dados:

      Evolução de Startups por Ano: {}
      Crescimento da Indústria: {}
      Investimento por Estado (Público e Privado): {}

      Analise a tendência de crescimento, os principais estados que recebem investimentos e a participação dos setores público e privado. O resumo deve ser em português, bem estruturado, e destacar as informações mais relevantes."#,
        serialize(&input.startups),
        serialize(&input.industry),
        serialize(&input.investment),
    )
}

/// Handler for the smart-summary call. This is the one unconstrained call:
/// no response schema, the model's text comes back verbatim.
pub struct GenerateSummaryHandler {
    provider: Arc<dyn AiProvider>,
}

impl GenerateSummaryHandler {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self, input: &SummaryInput) -> Result<String, FetchError> {
        Ok(self.provider.generate_text(&prompt_for(input)).await?)
    }
}
