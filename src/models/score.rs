use serde::{Deserialize, Serialize};

/// The three additive parts of a composite score, plus their rounded sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Similarity-derived share, 0 to 50.
    pub accuracy: f64,
    /// 30 when the validated text mentions an explanation, otherwise 20.
    pub explanation: f64,
    /// 20 when the validated text mentions a formula or concept, otherwise 10.
    pub thoroughness: f64,
    /// Sum of the three, rounded to two decimals. Always within 30..=100.
    pub total: f64,
}

impl ScoreBreakdown {
    pub const MIN_TOTAL: f64 = 30.0;
    pub const MAX_TOTAL: f64 = 100.0;
}
