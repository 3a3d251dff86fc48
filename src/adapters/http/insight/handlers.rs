//! HTTP handlers for the insight endpoints.

use axum::extract::State;
use axum::Json;
use tracing::error;

use crate::adapters::http::{ApiError, AppState};
use crate::application::insight::SummaryInput;

use super::dto::{AskQuestionRequest, AskQuestionResponse, SummaryRequest, SummaryResponse};

/// POST /api/ai/pergunta
pub async fn ask_question(
    State(state): State<AppState>,
    Json(request): Json<AskQuestionRequest>,
) -> Result<Json<AskQuestionResponse>, ApiError> {
    let question = request
        .question
        .as_deref()
        .map(str::trim)
        .filter(|question| !question.is_empty())
        .ok_or_else(|| {
            ApiError::BadRequest("A pergunta é necessária para a requisição.".to_string())
        })?;

    let resposta = state.question_handler().handle(question).await.map_err(|err| {
        error!(error = %err, "question answering failed");
        ApiError::Internal("Não foi possível obter uma resposta da IA.".to_string())
    })?;

    Ok(Json(AskQuestionResponse { resposta }))
}

/// POST /api/ai/resumointeligente
pub async fn generate_summary(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let input = SummaryInput::from(request);
    if input.is_empty() {
        return Err(ApiError::BadRequest(
            "Dados para o resumo são obrigatórios.".to_string(),
        ));
    }

    let resumo = state.summary_handler().handle(&input).await.map_err(|err| {
        error!(error = %err, "summary generation failed");
        ApiError::Internal("Erro interno no servidor.".to_string())
    })?;

    Ok(Json(SummaryResponse { resumo }))
}
