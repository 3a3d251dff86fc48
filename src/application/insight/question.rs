//! AnswerQuestionHandler - scope-guarded Q&A about the Brazilian ecosystem.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::application::FetchError;
use crate::ports::AiProvider;

fn prompt_for(question: &str) -> String {
    format!(
        r#"
Analise a seguinte pergunta do usuário: "{question}"

**Escopo de atuação:**
Responda apenas perguntas relacionadas a **inovação, investimentos, startups, tecnologia ou indústria no Brasil**, incluindo temas ligados à **ODS 9 (Indústria, Inovação e Infraestrutura)**.

**Instrução de resposta dentro do escopo:**
Se a pergunta estiver dentro desses temas, forneça uma **resposta completa, clara e informativa**, baseada no conhecimento do modelo sobre o contexto brasileiro.

**Instrução de resposta fora do escopo:**
Se a pergunta não estiver relacionada aos temas acima, responda **exatamente** com:
"Sua pergunta está fora do meu escopo de atuação, que é focado em inovação, investimentos e o setor industrial do Brasil. Tente perguntar sobre startups, ODS 9 ou o ecossistema de tecnologia."
"#
    )
}

fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "resposta": { "type": "STRING" }
        },
        "propertyOrdering": ["resposta"]
    })
}

/// Handler for user questions.
pub struct AnswerQuestionHandler {
    provider: Arc<dyn AiProvider>,
}

impl AnswerQuestionHandler {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self, question: &str) -> Result<String, FetchError> {
        let raw = self
            .provider
            .generate_json(&prompt_for(question), response_schema())
            .await?;
        raw.get("resposta")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| FetchError::shape("missing resposta field"))
    }
}
