pub mod routes;
pub mod models;
pub mod errors;
pub mod auth;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::InkcheckConfig;
use crate::llm::{provider_from_config, LLMProvider};
use crate::pipeline::image::MAX_IMAGE_BYTES;
use crate::pipeline::PipelineConfig;

/// Request body cap for the text routes.
pub const TEXT_BODY_LIMIT: usize = 512 * 1024;
/// Base64 of the largest accepted image plus room for the JSON envelope.
pub const PROCESS_BODY_LIMIT: usize = MAX_IMAGE_BYTES.div_ceil(3) * 4 + 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<InkcheckConfig>,
    /// `None` when no API key is available; `/api/process` then answers 503.
    pub llm: Option<Arc<dyn LLMProvider>>,
    pub api_token: Option<String>,
}

impl AppState {
    pub fn new(config: InkcheckConfig, llm: Option<Arc<dyn LLMProvider>>) -> Self {
        Self {
            config: Arc::new(config),
            llm,
            api_token: None,
        }
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Fresh pipeline settings (and run id) per request.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::from_config(&self.config)
    }
}

/// State for `inkcheck serve`. A missing provider is logged, not fatal, so the
/// offline endpoints stay available.
pub fn create_app_state(config: InkcheckConfig) -> AppState {
    let llm = match provider_from_config(&config, None, None) {
        Ok(provider) => Some(provider),
        Err(e) => {
            warn!(error = %e, "Image processing disabled");
            None
        }
    };
    let api_token = std::env::var(auth::API_TOKEN_ENV).ok().filter(|t| !t.is_empty());

    let mut state = AppState::new(config, llm);
    state.api_token = api_token;
    state
}

pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/api/score",
            post(routes::score::score_texts).layer(DefaultBodyLimit::max(TEXT_BODY_LIMIT)),
        )
        .route(
            "/api/compare",
            post(routes::compare::compare_texts).layer(DefaultBodyLimit::max(TEXT_BODY_LIMIT)),
        )
        .route(
            "/api/process",
            post(routes::process::process_image).layer(DefaultBodyLimit::max(PROCESS_BODY_LIMIT)),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::api_auth_middleware));

    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
