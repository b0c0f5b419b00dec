pub mod api;
pub mod cli;
pub mod comparison;
pub mod config;
pub mod errors;
pub mod llm;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod reporting;
pub mod utils;

pub use comparison::{align, score, score_breakdown, similarity};
pub use errors::InkcheckError;
pub use models::{ComparisonRow, ComparisonTable, ScoreBreakdown};
