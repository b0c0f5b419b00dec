use super::types::InkcheckError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub retryable: bool,
}

impl InkcheckError {
    /// Classify this error to determine its type and whether it can be retried.
    pub fn classify(&self) -> ErrorClassification {
        let (error_type, retryable) = match self {
            // Transient upstream failures
            InkcheckError::RateLimit(_) => ("RateLimitError", true),
            InkcheckError::Network(_) => ("NetworkError", true),
            InkcheckError::Timeout(_) => ("TimeoutError", true),
            InkcheckError::LLMApi(_) => ("LLMApiError", true),

            // Retrying cannot change the outcome
            InkcheckError::Authentication(_) => ("AuthenticationError", false),
            InkcheckError::LLMRejected(_) => ("LLMRejectedError", false),
            InkcheckError::InvalidInput(_) => ("InvalidInputError", false),
            InkcheckError::Config(_) => ("ConfigError", false),
            InkcheckError::InvalidImage(_) => ("InvalidImageError", false),
            InkcheckError::Prompt(_) => ("PromptError", false),
            InkcheckError::Yaml(_) => ("YamlError", false),

            InkcheckError::Io(_) => ("IoError", true),
            InkcheckError::Json(_) => ("JsonError", true),
            InkcheckError::Internal(_) => ("InternalError", true),
        };
        ErrorClassification { error_type, retryable }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_is_retryable() {
        let err = InkcheckError::RateLimit("too many requests".into());
        let class = err.classify();
        assert!(class.retryable);
        assert_eq!(class.error_type, "RateLimitError");
    }

    #[test]
    fn test_auth_error_not_retryable() {
        let err = InkcheckError::Authentication("bad key".into());
        let class = err.classify();
        assert!(!class.retryable);
        assert_eq!(class.error_type, "AuthenticationError");
    }

    #[test]
    fn test_invalid_image_not_retryable() {
        let err = InkcheckError::InvalidImage("not a png".into());
        assert!(!err.classify().retryable);
    }

    #[test]
    fn test_rejected_request_not_retryable() {
        let class = InkcheckError::LLMRejected("model not found".into()).classify();
        assert!(!class.retryable);
        assert_eq!(class.error_type, "LLMRejectedError");
        assert!(InkcheckError::LLMApi("internal".into()).classify().retryable);
    }

    #[test]
    fn test_network_and_timeout_retryable() {
        assert!(InkcheckError::Network("connection refused".into()).classify().retryable);
        assert!(InkcheckError::Timeout("timed out".into()).classify().retryable);
    }
}
