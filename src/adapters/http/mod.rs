//! HTTP adapters - REST API implementation.
//!
//! The router mounts the statistics and insight modules under `/api/ai`
//! plus a liveness probe, with tracing, CORS and request-timeout layers.

pub mod insight;
pub mod stats;

use std::sync::Arc;
use std::time::Duration;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use http::{HeaderValue, StatusCode};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::insight::{AnswerQuestionHandler, GenerateSummaryHandler};
use crate::application::stats::{
    FetchDashboardHandler, FetchIndustryGrowthHandler, FetchReportHandler,
    FetchStartupSeriesHandler, FetchStateBreakdownHandler, FetchStateInvestmentHandler,
};
use crate::config::ServerConfig;
use crate::ports::AiProvider;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state: the AI provider behind every route.
#[derive(Clone)]
pub struct AppState {
    pub ai_provider: Arc<dyn AiProvider>,
}

impl AppState {
    pub fn new(ai_provider: Arc<dyn AiProvider>) -> Self {
        Self { ai_provider }
    }

    pub fn startup_series_handler(&self) -> FetchStartupSeriesHandler {
        FetchStartupSeriesHandler::new(self.ai_provider.clone())
    }

    pub fn industry_growth_handler(&self) -> FetchIndustryGrowthHandler {
        FetchIndustryGrowthHandler::new(self.ai_provider.clone())
    }

    pub fn state_investment_handler(&self) -> FetchStateInvestmentHandler {
        FetchStateInvestmentHandler::new(self.ai_provider.clone())
    }

    pub fn state_breakdown_handler(&self) -> FetchStateBreakdownHandler {
        FetchStateBreakdownHandler::new(self.ai_provider.clone())
    }

    pub fn report_handler(&self) -> FetchReportHandler {
        FetchReportHandler::new(self.ai_provider.clone())
    }

    pub fn dashboard_handler(&self) -> FetchDashboardHandler {
        FetchDashboardHandler::new(self.ai_provider.clone())
    }

    pub fn question_handler(&self) -> AnswerQuestionHandler {
        AnswerQuestionHandler::new(self.ai_provider.clone())
    }

    pub fn summary_handler(&self) -> GenerateSummaryHandler {
        GenerateSummaryHandler::new(self.ai_provider.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Error body of every failing route: `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// API error that implements IntoResponse.
///
/// The route handlers pick the message; only two statuses exist in the
/// contract besides 200: 400 for missing input, 500 for upstream/parse
/// failures.
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ApiError::BadRequest(error) => (StatusCode::BAD_REQUEST, error),
            ApiError::Internal(error) => (StatusCode::INTERNAL_SERVER_ERROR, error),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Router
// ════════════════════════════════════════════════════════════════════════════════

/// Builds the application router with all routes and layers.
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let api = stats::stats_routes().merge(insight::insight_routes());

    Router::new()
        .nest("/api/ai", api)
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors_layer(server))
        .with_state(state)
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}
