//! FetchStateBreakdownHandler - aggregated per-state investment totals.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::application::FetchError;
use crate::domain::stats::{aggregate_state_investment, RawStateRow, StateInvestmentTotal};
use crate::ports::AiProvider;

const PROMPT: &str = "Gere dados de investimento e crescimento de startups no Brasil.";

fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "investimento_por_estado": {
                    "type": "OBJECT",
                    "additionalProperties": {
                        "type": "NUMBER"
                    }
                }
            }
        }
    })
}

/// Handler for the aggregated investment-by-state breakdown.
///
/// The AI returns one map per row; totals are summed per state with
/// spelling variants merged through name normalization.
pub struct FetchStateBreakdownHandler {
    provider: Arc<dyn AiProvider>,
}

impl FetchStateBreakdownHandler {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self) -> Result<Vec<StateInvestmentTotal>, FetchError> {
        let raw = self.provider.generate_json(PROMPT, response_schema()).await?;
        let rows: Vec<RawStateRow> = serde_json::from_value(raw).map_err(FetchError::shape)?;
        if rows.is_empty() {
            return Err(FetchError::Empty);
        }
        Ok(aggregate_state_investment(&rows))
    }
}
