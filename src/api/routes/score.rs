use axum::Json;
use tracing::debug;

use crate::api::models::{ScoreResponse, TextPairRequest};
use crate::comparison::score_breakdown;
use crate::errors::InkcheckError;
use crate::pipeline::run_blocking;

pub async fn score_texts(Json(req): Json<TextPairRequest>) -> Result<Json<ScoreResponse>, InkcheckError> {
    req.check_size()?;
    let breakdown = run_blocking("scoring", move || score_breakdown(&req.extracted, &req.validated)).await?;
    debug!(score = breakdown.total, "Scored text pair");
    Ok(Json(ScoreResponse {
        score: breakdown.total,
        breakdown,
    }))
}
