//! HTTP handlers for the statistics endpoints.
//!
//! Each handler runs its application fetch handler and maps failures to the
//! route's error message. The Portuguese copy is rendered verbatim by the
//! consuming frontend.

use axum::extract::State;
use axum::Json;
use tracing::error;

use crate::adapters::http::{ApiError, AppState};
use crate::application::FetchError;
use crate::domain::stats::{DashboardPayload, StateInvestmentTotal};

use super::dto::{
    IndustryGrowthResponse, ReportResponse, StartupSeriesResponse, StateInvestmentResponse,
};

/// GET /api/ai/startups
pub async fn get_startup_series(
    State(state): State<AppState>,
) -> Result<Json<StartupSeriesResponse>, ApiError> {
    let rows = state.startup_series_handler().handle().await.map_err(|err| {
        error!(error = %err, "startup series fetch failed");
        match err {
            FetchError::Shape(_) => {
                ApiError::Internal(format!("Falha interna no servidor: {err}"))
            }
            _ => ApiError::Internal("Dados indisponíveis ou inválidos da IA.".to_string()),
        }
    })?;

    Ok(Json(StartupSeriesResponse {
        startups_por_ano: rows,
    }))
}

/// GET /api/ai/industria
pub async fn get_industry_growth(
    State(state): State<AppState>,
) -> Result<Json<IndustryGrowthResponse>, ApiError> {
    let rows = state.industry_growth_handler().handle().await.map_err(|err| {
        error!(error = %err, "industry growth fetch failed");
        match err {
            FetchError::Shape(_) => ApiError::Internal(
                "Falha interna no servidor. Verifique a API da IA.".to_string(),
            ),
            _ => ApiError::Internal("Dados indisponíveis ou inválidos da IA.".to_string()),
        }
    })?;

    Ok(Json(IndustryGrowthResponse {
        crescimento_industria: rows,
    }))
}

/// GET /api/ai/investimento
pub async fn get_state_investment(
    State(state): State<AppState>,
) -> Result<Json<StateInvestmentResponse>, ApiError> {
    let rows = state.state_investment_handler().handle().await.map_err(|err| {
        error!(error = %err, "state investment fetch failed");
        ApiError::Internal("Dados de investimento indisponíveis ou inválidos.".to_string())
    })?;

    Ok(Json(StateInvestmentResponse {
        investimento_por_estado: rows,
    }))
}

/// GET /api/ai/dados-por-estado
///
/// The one route answering a top-level array.
pub async fn get_state_breakdown(
    State(state): State<AppState>,
) -> Result<Json<Vec<StateInvestmentTotal>>, ApiError> {
    let totals = state.state_breakdown_handler().handle().await.map_err(|err| {
        error!(error = %err, "state breakdown fetch failed");
        match err {
            FetchError::Shape(_) => {
                ApiError::Internal("Falha interna no servidor.".to_string())
            }
            _ => ApiError::Internal("Dados indisponíveis da IA.".to_string()),
        }
    })?;

    Ok(Json(totals))
}

/// GET /api/ai/relatorios
pub async fn get_report(State(state): State<AppState>) -> Result<Json<ReportResponse>, ApiError> {
    let report = state.report_handler().handle().await.map_err(|err| {
        error!(error = %err, "report fetch failed");
        match err {
            FetchError::Shape(_) => {
                ApiError::Internal(format!("Falha interna no servidor: {err}"))
            }
            _ => ApiError::Internal("Dados indisponíveis ou inválidos da IA.".to_string()),
        }
    })?;

    Ok(Json(ReportResponse::from(report)))
}

/// POST /api/ai/dashboard
pub async fn post_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardPayload>, ApiError> {
    let payload = state.dashboard_handler().handle().await.map_err(|err| {
        error!(error = %err, "dashboard fetch failed");
        ApiError::Internal(
            "Não foi possível obter uma resposta da IA ou dados de investimento.".to_string(),
        )
    })?;

    Ok(Json(payload))
}
