//! FetchIndustryGrowthHandler - Industry-4.0 growth series.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::application::FetchError;
use crate::domain::stats::{IndustryGrowth, RawIndustryRow};
use crate::ports::AiProvider;

const PROMPT: &str = "Gere dados fictícios sobre o crescimento percentual da Indústria 4.0 \
por ano no Brasil. Inclua anos de 2018 a 2025 e categorize como 'histórico' ou 'projeção'.";

fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "ano": { "type": "INTEGER" },
                "crescimento_industria": { "type": "NUMBER" },
                "data_tipo": { "type": "STRING" }
            },
            "propertyOrdering": ["ano", "crescimento_industria", "data_tipo"]
        }
    })
}

/// Handler for the yearly industry growth series.
pub struct FetchIndustryGrowthHandler {
    provider: Arc<dyn AiProvider>,
}

impl FetchIndustryGrowthHandler {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self) -> Result<Vec<IndustryGrowth>, FetchError> {
        let raw = self.provider.generate_json(PROMPT, response_schema()).await?;
        let rows: Vec<RawIndustryRow> = serde_json::from_value(raw).map_err(FetchError::shape)?;
        Ok(rows.into_iter().map(IndustryGrowth::from).collect())
    }
}
