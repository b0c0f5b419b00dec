use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::score::ScoreBreakdown;

/// Downloadable record of one run: both texts and the final score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub extracted_data: String,
    pub validated_data: String,
    pub score: f64,
}

/// Token counts reported by the model, summed over a run's calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// Side information about how a run was produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    pub run_id: String,
    pub created_at: DateTime<Utc>,
    /// Model that produced the texts; `None` for offline scoring.
    pub model: Option<String>,
    pub image_mime: Option<String>,
    pub extraction_ms: Option<u64>,
    pub validation_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
    pub breakdown: ScoreBreakdown,
    pub rows: usize,
    pub changed_rows: usize,
}

impl RunMetadata {
    /// Metadata for a run that scored two texts without calling a model.
    pub fn offline(breakdown: ScoreBreakdown, rows: usize, changed_rows: usize) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            model: None,
            image_mime: None,
            extraction_ms: None,
            validation_ms: None,
            usage: None,
            breakdown,
            rows,
            changed_rows,
        }
    }
}
