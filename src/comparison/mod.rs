pub mod align;
pub mod scorer;
pub mod diff;

pub use align::align;
pub use scorer::{score, score_breakdown};
pub use diff::{line_change_counts, unified_diff};
pub use crate::utils::similarity::similarity_ratio as similarity;
