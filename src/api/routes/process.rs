use std::path::Path;

use axum::{extract::State, Json};
use data_encoding::BASE64;
use tracing::info;

use crate::api::models::{ProcessRequest, ProcessResponse};
use crate::api::AppState;
use crate::errors::InkcheckError;
use crate::pipeline::image::{has_image_extension, load_image};
use crate::pipeline::PipelineOrchestrator;

const DEFAULT_UPLOAD_NAME: &str = "upload";

/// Strip an optional data-URL prefix and whitespace, then decode.
fn decode_image(payload: &str) -> Result<Vec<u8>, InkcheckError> {
    let encoded = match payload.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => payload,
    };
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    BASE64
        .decode(compact.as_bytes())
        .map_err(|e| InkcheckError::InvalidImage(format!("image_base64 is not valid base64: {}", e)))
}

pub async fn process_image(
    State(state): State<AppState>,
    Json(req): Json<ProcessRequest>,
) -> Result<Json<ProcessResponse>, InkcheckError> {
    let name = req.filename.as_deref().unwrap_or(DEFAULT_UPLOAD_NAME);
    if req.filename.is_some() && !has_image_extension(Path::new(name)) {
        return Err(InkcheckError::InvalidImage(format!("{} must be a .jpg, .jpeg, or .png file", name)));
    }
    let image = load_image(decode_image(&req.image_base64)?, name)?;

    let llm = state.llm.clone().ok_or_else(|| {
        InkcheckError::Config("No model provider configured on this server".into())
    })?;

    let orchestrator = PipelineOrchestrator::new(state.pipeline_config(), llm);
    let outcome = orchestrator.run(&image).await?;
    info!(run_id = %outcome.run_id, score = outcome.breakdown.total, "Processed upload");

    Ok(Json(ProcessResponse {
        score: outcome.breakdown.total,
        breakdown: outcome.breakdown,
        run_id: outcome.run_id,
        extracted_data: outcome.extracted,
        validated_data: outcome.validated,
        rows: outcome.table.into_rows(),
    }))
}
