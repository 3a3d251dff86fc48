//! FetchReportHandler - combined report series in a single AI call.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::application::FetchError;
use crate::domain::stats::{RawReport, Report};
use crate::ports::AiProvider;

const PROMPT: &str = r#"Gere um objeto JSON contendo dados realistas sobre o cenário de startups, indústria e investimentos no Brasil, baseados em tendências históricas (2018-2023) e projeções (2024).

O objeto JSON deve ter as seguintes chaves, estritamente: 'startupsPorAno', 'investimentoPorEstado', 'crescimentoIndustria'.

Detalhes dos Dados Requeridos:

1. **startupsPorAno:** Array de objetos (year, count) cobrindo **2018 a 2024**. O 'count' representa o número total de startups no Brasil.
2. **investimentoPorEstado:** Array de objetos (state, public, private) com valores em **milhões de BRL**.
* **Instrução Crítica de Escala:** Os valores 'public' e 'private' devem ser o **número que representa a quantia em milhões de BRL**.
 * **Exemplo de Escala (BILHÕES):** Se o investimento privado em SP foi de R$ 5 BILHÕES, o valor deve ser **5000**. Se for R$ 800 MILHÕES, o valor deve ser **800**.
 * **Foco Realista:** Mantenha a forte concentração em SP e RJ e garanta que os valores refletem a magnitude do mercado (bilhões anuais).
3. **crescimentoIndustria:** Array de objetos (year, value_percent) cobrindo **2018 a 2024**. O 'value_percent' representa o crescimento anual da indústria de tecnologia do país.

**Instrução Extra:** Garanta que os dados de investimento reflitam a alta em 2021 e a correção nos anos seguintes."#;

fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "startupsPorAno": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "year": { "type": "NUMBER" },
                        "count": { "type": "NUMBER" }
                    }
                }
            },
            "investimentoPorEstado": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "state": { "type": "STRING" },
                        "public": { "type": "NUMBER" },
                        "private": { "type": "NUMBER" }
                    }
                }
            },
            "crescimentoIndustria": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "year": { "type": "NUMBER" },
                        "value_percent": { "type": "NUMBER" }
                    }
                }
            }
        },
        "propertyOrdering": ["startupsPorAno", "investimentoPorEstado", "crescimentoIndustria"]
    })
}

/// Handler for the combined report call.
pub struct FetchReportHandler {
    provider: Arc<dyn AiProvider>,
}

impl FetchReportHandler {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self) -> Result<Report, FetchError> {
        let raw = self.provider.generate_json(PROMPT, response_schema()).await?;
        let report: RawReport = serde_json::from_value(raw).map_err(FetchError::shape)?;
        Ok(report.into_report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAiProvider;
    use serde_json::json;

    #[tokio::test]
    async fn converts_investment_to_absolute_brl() {
        let provider = MockAiProvider::new().with_json_response(json!({
            "startupsPorAno": [{"year": 2021, "count": 13374}],
            "investimentoPorEstado": [{"state": "SP", "public": 800, "private": 5000}],
            "crescimentoIndustria": [{"year": 2021, "value_percent": 14.2}]
        }));
        let handler = FetchReportHandler::new(Arc::new(provider));

        let report = handler.handle().await.unwrap();

        assert_eq!(report.startups_by_year[0].count, 13374);
        assert_eq!(report.investment_by_state[0].public, 800_000_000.0);
        assert_eq!(report.investment_by_state[0].private, 5_000_000_000.0);
        assert_eq!(report.industry_growth[0].value_percent, 14.2);
    }

    #[tokio::test]
    async fn missing_sections_default_to_empty() {
        let provider = MockAiProvider::new().with_json_response(json!({
            "startupsPorAno": [{"year": 2020, "count": 12000}]
        }));
        let handler = FetchReportHandler::new(Arc::new(provider));

        let report = handler.handle().await.unwrap();

        assert_eq!(report.startups_by_year.len(), 1);
        assert!(report.investment_by_state.is_empty());
        assert!(report.industry_growth.is_empty());
    }

    #[tokio::test]
    async fn tolerates_string_years() {
        let provider = MockAiProvider::new().with_json_response(json!({
            "startupsPorAno": [{"year": "2024", "count": 15000}]
        }));
        let handler = FetchReportHandler::new(Arc::new(provider));

        let report = handler.handle().await.unwrap();
        assert_eq!(report.startups_by_year[0].year, 2024);
    }
}
