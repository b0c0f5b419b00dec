use std::sync::Arc;
use std::time::Duration;

use crate::config::credentials::resolve_api_key;
use crate::config::InkcheckConfig;
use crate::errors::InkcheckError;
use super::provider::LLMProvider;
use super::gemini::GeminiProvider;

pub fn create_provider(
    provider_name: &str,
    api_key: &str,
    model: Option<&str>,
    base_url: Option<&str>,
    timeout: Duration,
) -> Result<Arc<dyn LLMProvider>, InkcheckError> {
    if api_key.trim().is_empty() {
        return Err(InkcheckError::Config(format!(
            "No API key for {}. Pass --api-key, set llm.api_key, or export {}",
            provider_name,
            crate::config::credentials::API_KEY_ENV
        )));
    }

    match provider_name {
        "gemini" => Ok(Arc::new(GeminiProvider::new(api_key, model, base_url, timeout)?)),
        _ => Err(InkcheckError::Config(format!("Unknown LLM provider: {}", provider_name))),
    }
}

/// Build the configured provider. CLI overrides win over the file values.
pub fn provider_from_config(
    config: &InkcheckConfig,
    model_override: Option<&str>,
    api_key_override: Option<&str>,
) -> Result<Arc<dyn LLMProvider>, InkcheckError> {
    let llm = config.llm.as_ref();
    let api_key = resolve_api_key(api_key_override, llm.and_then(|l| l.api_key.as_deref()))
        .unwrap_or_default();
    create_provider(
        config.provider(),
        &api_key,
        Some(model_override.unwrap_or(config.model())),
        llm.and_then(|l| l.base_url.as_deref()),
        Duration::from_secs(config.timeout_secs()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_provider_created() {
        let provider = create_provider("gemini", "key", None, None, Duration::from_secs(1)).unwrap();
        assert_eq!(provider.provider_name(), "gemini");
        assert_eq!(provider.model_name(), "gemini-1.5-flash");
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let result = create_provider("anthropic", "key", None, None, Duration::from_secs(1));
        assert!(matches!(result, Err(InkcheckError::Config(_))));
    }

    #[test]
    fn test_model_override_wins() {
        let config = crate::config::parse_config_str("llm:\n  model: gemini-1.5-pro\n").unwrap();
        let provider = provider_from_config(&config, Some("gemini-2.0-flash"), Some("key")).unwrap();
        assert_eq!(provider.model_name(), "gemini-2.0-flash");

        let provider = provider_from_config(&config, None, Some("key")).unwrap();
        assert_eq!(provider.model_name(), "gemini-1.5-pro");
    }

    #[test]
    fn test_missing_key_rejected() {
        let result = create_provider("gemini", "", None, None, Duration::from_secs(1));
        assert!(matches!(result, Err(InkcheckError::Config(_))));
    }
}
