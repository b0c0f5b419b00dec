use tracing::debug;

/// Environment variable consulted when no API key is configured.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Resolve a credential value. If the value starts with '$', treat it as an
/// environment variable reference and resolve from the environment.
pub fn resolve_credential(value: &str) -> String {
    if let Some(var_name) = value.strip_prefix('$') {
        match std::env::var(var_name) {
            Ok(resolved) => {
                debug!(var = %var_name, "Resolved credential from environment");
                resolved
            }
            Err(_) => {
                debug!(var = %var_name, "Environment variable not set, using literal");
                value.to_string()
            }
        }
    } else {
        value.to_string()
    }
}

/// Pick the API key: explicit flag, then config file, then environment.
pub fn resolve_api_key(flag: Option<&str>, configured: Option<&str>) -> Option<String> {
    flag.map(str::to_string)
        .or_else(|| configured.map(resolve_credential))
        .or_else(|| std::env::var(API_KEY_ENV).ok())
        .filter(|key| !key.trim().is_empty())
}

/// Redact sensitive values in a string. Replaces known credential patterns
/// with [REDACTED].
pub fn redact_credentials(text: &str, secrets: &[&str]) -> String {
    let mut result = text.to_string();
    for secret in secrets {
        if !secret.is_empty() && secret.len() >= 4 {
            result = result.replace(secret, "[REDACTED]");
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_credential_passes_through() {
        assert_eq!(resolve_credential("abc123"), "abc123");
    }

    #[test]
    fn test_env_reference_resolves() {
        std::env::set_var("INKCHECK_TEST_KEY_RESOLVE", "from-env");
        assert_eq!(resolve_credential("$INKCHECK_TEST_KEY_RESOLVE"), "from-env");
    }

    #[test]
    fn test_unset_env_reference_keeps_literal() {
        assert_eq!(resolve_credential("$INKCHECK_TEST_KEY_UNSET"), "$INKCHECK_TEST_KEY_UNSET");
    }

    #[test]
    fn test_flag_wins_over_config() {
        let key = resolve_api_key(Some("flag-key"), Some("config-key"));
        assert_eq!(key.as_deref(), Some("flag-key"));
        let key = resolve_api_key(None, Some("config-key"));
        assert_eq!(key.as_deref(), Some("config-key"));
    }

    #[test]
    fn test_blank_key_is_rejected() {
        assert_eq!(resolve_api_key(Some("  "), None), None);
    }

    #[test]
    fn test_redact() {
        let out = redact_credentials("url?key=SECRETKEY&x=1", &["SECRETKEY", "ab"]);
        assert_eq!(out, "url?key=[REDACTED]&x=1");
    }
}
