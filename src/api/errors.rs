use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::warn;

use crate::errors::InkcheckError;

impl InkcheckError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            InkcheckError::InvalidImage(_) | InkcheckError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            // No usable provider on this server.
            InkcheckError::Config(_) => StatusCode::SERVICE_UNAVAILABLE,
            InkcheckError::Authentication(_)
            | InkcheckError::LLMApi(_)
            | InkcheckError::LLMRejected(_)
            | InkcheckError::RateLimit(_)
            | InkcheckError::Network(_)
            | InkcheckError::Timeout(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for InkcheckError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        if status.is_server_error() {
            warn!(status = status.as_u16(), error = %self, "Request failed");
        }
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(InkcheckError::InvalidImage("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(InkcheckError::InvalidInput("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(InkcheckError::LLMRejected("x".into()).status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(InkcheckError::Config("x".into()).status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(InkcheckError::RateLimit("x".into()).status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(InkcheckError::Authentication("x".into()).status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(InkcheckError::Internal("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
