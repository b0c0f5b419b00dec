use std::path::Path;
use crate::errors::InkcheckError;
use super::types::InkcheckConfig;
use super::security::validate_security;
use super::schema::CONFIG_SCHEMA;
use tracing::{debug, warn};

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<InkcheckConfig, InkcheckError> {
    if !path.exists() {
        return Err(InkcheckError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(InkcheckError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config = parse_config_str(&content)?;
    debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Parse and validate configuration text.
pub fn parse_config_str(content: &str) -> Result<InkcheckConfig, InkcheckError> {
    // An empty file is a valid, all-defaults config.
    if content.trim().is_empty() {
        return Ok(InkcheckConfig::default());
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    validate_schema(&yaml)?;

    let config: InkcheckConfig = serde_yaml::from_value(yaml)?;
    validate_values(&config)?;
    validate_security(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), InkcheckError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| InkcheckError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| InkcheckError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory: typed parsing below is the hard gate.
        for e in errors {
            warn!(validation_error = %e, path = %e.instance_path, "Config schema warning");
        }
    }

    Ok(())
}

fn validate_values(config: &InkcheckConfig) -> Result<(), InkcheckError> {
    if let Some(llm) = &config.llm {
        if llm.timeout_secs == Some(0) {
            return Err(InkcheckError::Config("llm.timeout_secs must be at least 1".into()));
        }
        if let Some(provider) = &llm.provider {
            if provider != "gemini" {
                return Err(InkcheckError::Config(format!("Unknown LLM provider: {}", provider)));
            }
        }
    }

    if let Some(formats) = config.output.as_ref().and_then(|o| o.formats.as_ref()) {
        if formats.is_empty() {
            return Err(InkcheckError::Config("output.formats must name at least one format".into()));
        }
    }

    Ok(())
}
