//! Axum router configuration for the statistics endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    get_industry_growth, get_report, get_startup_series, get_state_breakdown,
    get_state_investment, post_dashboard,
};
use crate::adapters::http::AppState;

/// Create the statistics router.
///
/// Mounted under `/api/ai`:
/// - `GET /startups` - startups-per-year series
/// - `GET /industria` - industry growth series
/// - `GET /investimento` - investment per state (millions of BRL)
/// - `GET /dados-por-estado` - aggregated per-state totals
/// - `GET /relatorios` - combined report series
/// - `POST /dashboard` - full dashboard payload
pub fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/startups", get(get_startup_series))
        .route("/industria", get(get_industry_growth))
        .route("/investimento", get(get_state_investment))
        .route("/dados-por-estado", get(get_state_breakdown))
        .route("/relatorios", get(get_report))
        .route("/dashboard", post(post_dashboard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_are_defined() {
        // This just verifies the router can be constructed
        let _router = stats_routes();
    }
}
