//! FetchDashboardHandler - full dashboard payload in one AI call.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::application::FetchError;
use crate::domain::stats::DashboardPayload;
use crate::ports::AiProvider;

const PROMPT: &str = r#"Gere um relatório completo e conciso sobre o cenário de startups e investimentos no Brasil. A resposta deve seguir estritamente o formato JSON definido pelo schema de saída, sem qualquer texto adicional fora do campo 'resposta'.

O relatório deve incluir:
1. Uma **análise geral concisa** (campo 'resposta') sobre o ecossistema brasileiro, mencionando a relevância da **ODS 9 (Indústria, Inovação e Infraestrutura)** para o crescimento sustentável e tecnológico do setor.
2. Dados detalhados (campo 'dados') para o período de **2018 a 2025**, sendo **dados históricos até 2023** e **projeções/estimativas para 2024 e 2025**.

Os campos de dados devem conter:
- **startups_por_ano**: Evolução do número de startups por ano. Use o campo 'status' para indicar 'histórico' ou 'projeção'.
- **investimento_por_estado**: Investimento anual. Os campos 'public' e 'private' devem conter **apenas o valor numérico que representa a quantia total em milhões de BRL**.
    - **Instrução de Unidade:** Para valores em bilhões, converta para milhões (Ex: R$ 1.500.000.000,00 deve ser **1500**). Para valores em milhões, use o valor direto (Ex: R$ 850.000.000,00 deve ser **850**).
- **crescimento_industria**: Crescimento percentual da indústria de tecnologia do país. O campo 'value_percent' deve ser o **valor numérico percentual** (Ex: para 10.5% o valor é 10.5).

O campo **fonte_dados** deve conter uma lista separada por vírgulas dos nomes das principais fontes de dados de Venture Capital e tecnologia (ex: "Distrito Dataminer, ABVCAP, Sebrae, Brasscom"). **Não inclua links ou URLs.**"#;

fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "resposta": { "type": "STRING" },
            "dados": {
                "type": "OBJECT",
                "properties": {
                    "startups_por_ano": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "year": { "type": "STRING" },
                                "count": { "type": "NUMBER" },
                                "status": { "type": "STRING" }
                            },
                            "propertyOrdering": ["year", "count", "status"]
                        }
                    },
                    "investimento_por_estado": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "state": { "type": "STRING" },
                                "public": { "type": "NUMBER" },
                                "private": { "type": "NUMBER" }
                            },
                            "propertyOrdering": ["state", "public", "private"]
                        }
                    },
                    "crescimento_industria": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "year": { "type": "STRING" },
                                "value_percent": { "type": "NUMBER" },
                                "status": { "type": "STRING" }
                            },
                            "propertyOrdering": ["year", "value_percent", "status"]
                        }
                    }
                },
                "propertyOrdering": [
                    "startups_por_ano",
                    "investimento_por_estado",
                    "crescimento_industria"
                ]
            },
            "fonte_dados": { "type": "STRING" }
        },
        "propertyOrdering": ["resposta", "dados", "fonte_dados"]
    })
}

/// Handler for the combined dashboard payload.
///
/// The schema asks for years as strings (the model is more reliable that
/// way on this call); the payload records parse them back to numbers.
pub struct FetchDashboardHandler {
    provider: Arc<dyn AiProvider>,
}

impl FetchDashboardHandler {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self) -> Result<DashboardPayload, FetchError> {
        let raw = self.provider.generate_json(PROMPT, response_schema()).await?;
        let payload: DashboardPayload = serde_json::from_value(raw).map_err(FetchError::shape)?;
        Ok(payload.with_investment_in_brl())
    }
}
