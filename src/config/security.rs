use reqwest::Url;
use tracing::warn;

use crate::errors::InkcheckError;
use super::types::InkcheckConfig;

/// Hosts that may be reached over plain http, for local Gemini stand-ins.
const LOOPBACK_HOSTS: &[&str] = &["localhost", "127.0.0.1", "[::1]"];

/// Checks that keep the API key from leaving over an unsafe channel.
/// Runs on the typed config after parsing.
pub fn validate_security(config: &InkcheckConfig) -> Result<(), InkcheckError> {
    let Some(llm) = &config.llm else {
        return Ok(());
    };

    if let Some(base_url) = &llm.base_url {
        check_base_url(base_url)?;
    }

    if let Some(key) = &llm.api_key {
        if !key.starts_with('$') {
            warn!("llm.api_key holds a literal key; prefer $GEMINI_API_KEY");
        }
    }

    Ok(())
}

/// The key travels in a request header, so the endpoint must be https
/// unless it is on this machine.
fn check_base_url(raw: &str) -> Result<(), InkcheckError> {
    let url = Url::parse(raw)
        .map_err(|e| InkcheckError::Config(format!("llm.base_url is not a valid URL ({}): {}", e, raw)))?;

    match url.scheme() {
        "https" => Ok(()),
        "http" if url.host_str().is_some_and(|h| LOOPBACK_HOSTS.contains(&h)) => Ok(()),
        "http" => Err(InkcheckError::Config(format!(
            "llm.base_url must use https for non-local hosts: {}",
            raw
        ))),
        other => Err(InkcheckError::Config(format!(
            "llm.base_url has unsupported scheme '{}': {}",
            other, raw
        ))),
    }
}
