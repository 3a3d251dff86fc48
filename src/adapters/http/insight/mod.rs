//! Insight HTTP endpoints (Q&A and smart summary).

mod dto;
mod handlers;
mod routes;

pub use dto::{AskQuestionRequest, AskQuestionResponse, SummaryRequest, SummaryResponse};
pub use routes::insight_routes;
