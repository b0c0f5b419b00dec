use crate::api;
use crate::cli::commands::ServeArgs;
use crate::cli::process::load_optional_config;
use crate::errors::InkcheckError;
use tracing::info;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

pub async fn handle_serve(args: ServeArgs) -> Result<(), InkcheckError> {
    let config = load_optional_config(args.config.as_deref()).await?;
    let server = config.server.clone().unwrap_or_default();
    let host = args.host.or(server.host).unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = args.port.or(server.port).unwrap_or(DEFAULT_PORT);

    info!(host = %host, port, "Starting API server");

    let state = api::create_app_state(config);
    let app = api::build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| InkcheckError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
