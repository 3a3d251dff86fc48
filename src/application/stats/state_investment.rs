//! FetchStateInvestmentHandler - investment-per-state map.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::application::FetchError;
use crate::domain::stats::{investment_map_to_rows, StateInvestmentTotal};
use crate::ports::AiProvider;

const PROMPT: &str = "Gere dados sobre investimento (em milhões de BRL) em startups por \
estado no Brasil para um relatório. A resposta deve ser um objeto onde as chaves são as \
siglas dos estados e os valores são os investimentos.";

fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "investimento_por_estado": {
                "type": "OBJECT",
                "additionalProperties": {
                    "type": "INTEGER"
                }
            }
        }
    })
}

/// Handler for the per-state investment figures.
pub struct FetchStateInvestmentHandler {
    provider: Arc<dyn AiProvider>,
}

impl FetchStateInvestmentHandler {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self) -> Result<Vec<StateInvestmentTotal>, FetchError> {
        let raw = self.provider.generate_json(PROMPT, response_schema()).await?;
        let map = raw
            .get("investimento_por_estado")
            .and_then(Value::as_object)
            .ok_or_else(|| FetchError::shape("missing investimento_por_estado object"))?;
        Ok(investment_map_to_rows(map))
    }
}
