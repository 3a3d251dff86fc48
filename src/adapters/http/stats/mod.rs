//! Statistics HTTP endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    IndustryGrowthResponse, ReportResponse, StartupSeriesResponse, StateInvestmentResponse,
};
pub use routes::stats_routes;
