use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{info, debug};

use crate::comparison::{align, score_breakdown};
use crate::errors::{with_retry, InkcheckError};
use crate::llm::{ImageInput, LLMProvider};
use crate::prompts::{PromptLoader, PromptVariables, TRANSCRIBE, VALIDATE};
use crate::utils::truncation::preview;
use super::blocking::run_blocking;
use super::events::PipelineEvent;
use super::image::load_image;
use super::metrics::compute_usage;
use super::phase::display_name;
use super::state::*;

/// Runs image → transcription → critique → score for one upload.
pub struct PipelineOrchestrator {
    config: PipelineConfig,
    llm: Arc<dyn LLMProvider>,
    prompt_loader: PromptLoader,
    event_tx: Option<mpsc::UnboundedSender<PipelineEvent>>,
}

impl PipelineOrchestrator {
    pub fn new(config: PipelineConfig, llm: Arc<dyn LLMProvider>) -> Self {
        let prompt_loader = PromptLoader::new(config.prompts_dir.clone());
        Self {
            config,
            llm,
            prompt_loader,
            event_tx: None,
        }
    }

    /// Attach an event channel for streaming progress to the CLI.
    pub fn with_event_channel(mut self, tx: mpsc::UnboundedSender<PipelineEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    fn emit(&self, event: PipelineEvent) {
        if let Some(ref tx) = self.event_tx {
            let _ = tx.send(event);
        }
    }

    fn emit_phase_started(&self, phase: PhaseName) {
        self.emit(PipelineEvent::PhaseStarted {
            phase,
            display_name: display_name(phase).to_string(),
        });
    }

    fn emit_phase_completed(&self, phase: PhaseName, started: Instant) -> u64 {
        let duration_ms = started.elapsed().as_millis() as u64;
        self.emit(PipelineEvent::PhaseCompleted { phase, duration_ms });
        duration_ms
    }

    /// Validate the upload bytes, then run the pipeline.
    pub async fn run_bytes(&self, bytes: Vec<u8>, name: &str) -> Result<PipelineOutcome, InkcheckError> {
        let image = load_image(bytes, name)?;
        self.run(&image).await
    }

    pub async fn run(&self, image: &ImageInput) -> Result<PipelineOutcome, InkcheckError> {
        let started_at = Utc::now();
        info!(
            run_id = %self.config.run_id,
            provider = self.llm.provider_name(),
            model = self.llm.model_name(),
            mime = image.mime_type,
            bytes = image.data.len(),
            "Processing image"
        );

        // Phase 1: transcription
        self.emit_phase_started(PhaseName::Extraction);
        let phase_start = Instant::now();
        let llm = &self.llm;
        let transcribe_prompt = self.prompt_loader.load(TRANSCRIBE).await?;
        let prompt = transcribe_prompt.as_str();
        let transcription = with_retry("extraction", &self.config.retry, move || {
            llm.complete_with_image(prompt, image)
        })
        .await?;
        let extracted = transcription.content.clone();
        let extraction_ms = self.emit_phase_completed(PhaseName::Extraction, phase_start);
        debug!(preview = %preview(&extracted), "Extraction complete");

        // Phase 2: critique of the transcription
        self.emit_phase_started(PhaseName::Validation);
        let phase_start = Instant::now();
        let vars = PromptVariables { extracted_text: Some(extracted.clone()) };
        let validate_prompt = self.prompt_loader.render(VALIDATE, &vars).await?;
        let prompt = validate_prompt.as_str();
        let critique = with_retry("validation", &self.config.retry, move || {
            llm.complete(prompt, None)
        })
        .await?;
        let validated = critique.content.clone();
        let validation_ms = self.emit_phase_completed(PhaseName::Validation, phase_start);
        debug!(preview = %preview(&validated), "Validation complete");

        // Phase 3: scoring
        self.emit_phase_started(PhaseName::Scoring);
        let phase_start = Instant::now();
        let (e, v) = (extracted.clone(), validated.clone());
        let (breakdown, table) = run_blocking("scoring", move || (score_breakdown(&e, &v), align(&e, &v))).await?;
        self.emit_phase_completed(PhaseName::Scoring, phase_start);
        let usage = compute_usage([&transcription, &critique]);

        info!(
            run_id = %self.config.run_id,
            score = breakdown.total,
            accuracy = breakdown.accuracy,
            rows = table.len(),
            extraction_ms,
            validation_ms,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "Image processed"
        );

        Ok(PipelineOutcome {
            run_id: self.config.run_id.clone(),
            started_at,
            model: self.llm.model_name().to_string(),
            image_mime: image.mime_type.to_string(),
            extracted,
            validated,
            breakdown,
            table,
            extraction_ms,
            validation_ms,
            usage,
        })
    }
}
