use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::InkcheckConfig;
use crate::errors::RetryConfig;
use crate::models::{ComparisonTable, ExportRecord, RunMetadata, ScoreBreakdown, TokenUsage};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseName {
    Extraction,
    Validation,
    Scoring,
}

impl std::fmt::Display for PhaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Extraction => write!(f, "extraction"),
            Self::Validation => write!(f, "validation"),
            Self::Scoring => write!(f, "scoring"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub run_id: String,
    pub retry: RetryConfig,
    pub prompts_dir: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            retry: RetryConfig::default(),
            prompts_dir: None,
        }
    }
}

impl PipelineConfig {
    pub fn from_config(config: &InkcheckConfig) -> Self {
        Self {
            retry: RetryConfig {
                max_retries: config.max_retries(),
                ..RetryConfig::default()
            },
            prompts_dir: config
                .prompts
                .as_ref()
                .and_then(|p| p.directory.as_ref())
                .map(PathBuf::from),
            ..Self::default()
        }
    }
}

/// Everything one run produced.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub model: String,
    pub image_mime: String,
    pub extracted: String,
    pub validated: String,
    pub breakdown: ScoreBreakdown,
    pub table: ComparisonTable,
    pub extraction_ms: u64,
    pub validation_ms: u64,
    pub usage: TokenUsage,
}

impl PipelineOutcome {
    pub fn export_record(&self) -> ExportRecord {
        ExportRecord {
            extracted_data: self.extracted.clone(),
            validated_data: self.validated.clone(),
            score: self.breakdown.total,
        }
    }

    pub fn metadata(&self) -> RunMetadata {
        RunMetadata {
            run_id: self.run_id.clone(),
            created_at: self.started_at,
            model: Some(self.model.clone()),
            image_mime: Some(self.image_mime.clone()),
            extraction_ms: Some(self.extraction_ms),
            validation_ms: Some(self.validation_ms),
            usage: Some(self.usage),
            breakdown: self.breakdown,
            rows: self.table.len(),
            changed_rows: self.table.changed_rows(),
        }
    }

    pub fn total_duration_ms(&self) -> u64 {
        self.extraction_ms + self.validation_ms
    }
}
