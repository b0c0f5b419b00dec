use axum::Json;

use crate::api::models::{CompareResponse, TextPairRequest};
use crate::comparison::align;
use crate::errors::InkcheckError;

pub async fn compare_texts(Json(req): Json<TextPairRequest>) -> Result<Json<CompareResponse>, InkcheckError> {
    req.check_size()?;
    let table = align(&req.extracted, &req.validated);
    Ok(Json(CompareResponse {
        row_count: table.len(),
        rows: table.into_rows(),
    }))
}
