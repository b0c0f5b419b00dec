use thiserror::Error;

#[derive(Debug, Error)]
pub enum InkcheckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("LLM API error: {0}")]
    LLMApi(String),

    /// The model API refused the request itself (4xx, blocked content).
    #[error("LLM request rejected: {0}")]
    LLMRejected(String),

    #[error("Rate limited: {0}")]
    RateLimit(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl InkcheckError {
    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            InkcheckError::Config(_) | InkcheckError::Yaml(_) => 2,
            InkcheckError::InvalidImage(_) => 3,
            InkcheckError::Authentication(_) => 4,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(InkcheckError::Config("x".into()).exit_code(), 2);
        assert_eq!(InkcheckError::InvalidImage("x".into()).exit_code(), 3);
        assert_eq!(InkcheckError::Authentication("x".into()).exit_code(), 4);
        assert_eq!(InkcheckError::Network("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.png");
        let err: InkcheckError = io.into();
        assert!(err.to_string().contains("missing.png"));
    }
}
