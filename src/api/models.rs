use serde::{Deserialize, Serialize};

use crate::errors::InkcheckError;
use crate::models::{ComparisonRow, ScoreBreakdown};

/// Longest text, in characters, accepted per field by score and compare.
pub const MAX_TEXT_CHARS: usize = 20_000;

#[derive(Deserialize)]
pub struct TextPairRequest {
    pub extracted: String,
    pub validated: String,
}

impl TextPairRequest {
    pub fn check_size(&self) -> Result<(), InkcheckError> {
        for (field, text) in [("extracted", &self.extracted), ("validated", &self.validated)] {
            let chars = text.chars().count();
            if chars > MAX_TEXT_CHARS {
                return Err(InkcheckError::InvalidInput(format!(
                    "{} is {} characters, limit is {}",
                    field, chars, MAX_TEXT_CHARS
                )));
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
pub struct ProcessRequest {
    /// Raw base64 or a `data:image/...;base64,` URL.
    pub image_base64: String,
    pub filename: Option<String>,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

#[derive(Serialize)]
pub struct CompareResponse {
    pub rows: Vec<ComparisonRow>,
    pub row_count: usize,
}

#[derive(Serialize)]
pub struct ProcessResponse {
    pub run_id: String,
    pub extracted_data: String,
    pub validated_data: String,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub rows: Vec<ComparisonRow>,
}
