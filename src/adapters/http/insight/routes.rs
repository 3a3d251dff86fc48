//! Axum router configuration for the insight endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{ask_question, generate_summary};
use crate::adapters::http::AppState;

/// Create the insight router.
///
/// Mounted under `/api/ai`:
/// - `POST /pergunta` - scope-guarded question answering
/// - `POST /resumointeligente` - free-text summary of fetched series
pub fn insight_routes() -> Router<AppState> {
    Router::new()
        .route("/pergunta", post(ask_question))
        .route("/resumointeligente", post(generate_summary))
}
