//! FetchStartupSeriesHandler - startups-per-year series.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::application::FetchError;
use crate::domain::stats::{RawStartupRow, StartupYearCount};
use crate::ports::AiProvider;

const PROMPT: &str = "Gere dados sobre o número de startups por ano no Brasil para um \
relatório. Inclua anos de 2018 a 2025 e categorize como 'histórico' ou 'projeção'.";

fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "ano": { "type": "INTEGER" },
                "startups_por_ano": { "type": "INTEGER" },
                "data_tipo": { "type": "STRING" }
            },
            "propertyOrdering": ["ano", "startups_por_ano", "data_tipo"]
        }
    })
}

/// Handler for the startups-per-year series.
pub struct FetchStartupSeriesHandler {
    provider: Arc<dyn AiProvider>,
}

impl FetchStartupSeriesHandler {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self) -> Result<Vec<StartupYearCount>, FetchError> {
        let raw = self.provider.generate_json(PROMPT, response_schema()).await?;
        let rows: Vec<RawStartupRow> = serde_json::from_value(raw).map_err(FetchError::shape)?;
        Ok(rows.into_iter().map(StartupYearCount::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAiProvider, MockError};
    use serde_json::json;

    #[tokio::test]
    async fn reshapes_rows_into_contract_names() {
        let provider = MockAiProvider::new().with_json_response(json!([
            {"ano": 2018, "startups_por_ano": 10000, "data_tipo": "histórico"},
            {"ano": 2025, "startups_por_ano": 16500, "data_tipo": "projeção"}
        ]));
        let handler = FetchStartupSeriesHandler::new(Arc::new(provider.clone()));

        let rows = handler.handle().await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, 2018);
        assert_eq!(rows[0].count, 10000);
        assert_eq!(rows[1].status, "projeção");

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].prompt.contains("startups por ano"));
        assert_eq!(calls[0].schema.as_ref().unwrap()["type"], "ARRAY");
    }

    #[tokio::test]
    async fn provider_failure_propagates() {
        let provider = MockAiProvider::new().with_error(MockError::EmptyResponse);
        let handler = FetchStartupSeriesHandler::new(Arc::new(provider));

        let err = handler.handle().await.unwrap_err();
        assert!(matches!(err, FetchError::Provider(_)));
    }

    #[tokio::test]
    async fn wrong_shape_is_reported() {
        let provider =
            MockAiProvider::new().with_json_response(json!({"não": "é um array"}));
        let handler = FetchStartupSeriesHandler::new(Arc::new(provider));

        let err = handler.handle().await.unwrap_err();
        assert!(matches!(err, FetchError::Shape(_)));
    }
}
