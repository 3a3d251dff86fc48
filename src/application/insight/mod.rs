//! Free-form insight operations: scoped Q&A and the smart summary.

mod question;
mod summary;

pub use question::AnswerQuestionHandler;
pub use summary::{GenerateSummaryHandler, SummaryInput};
