use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tracing::debug;

use crate::config::credentials::redact_credentials;
use crate::errors::InkcheckError;
use crate::utils::truncation::truncate_error;
use super::provider::LLMProvider;
use super::types::{ImageInput, LLMResponse};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(
        api_key: &str,
        model: Option<&str>,
        base_url: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, InkcheckError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InkcheckError::Config(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model: model.unwrap_or(crate::config::DEFAULT_MODEL).to_string(),
            base_url: base_url.unwrap_or(DEFAULT_BASE_URL).trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    async fn generate(&self, parts: Vec<Value>) -> Result<LLMResponse, InkcheckError> {
        let body = json!({
            "contents": [{ "role": "user", "parts": parts }],
            "generationConfig": {
                "maxOutputTokens": 8192,
            }
        });

        debug!(model = %self.model, "Sending Gemini request");
        let resp = self.client.post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(InkcheckError::RateLimit("Gemini rate limit".into()));
        }

        let data: Value = match resp.json().await {
            Ok(data) => data,
            Err(_) if !status.is_success() => Value::Null,
            Err(e) => return Err(InkcheckError::LLMApi(format!("Parse error: {}", e))),
        };

        if !status.is_success() || data.get("error").is_some() {
            return Err(self.error_from_response(status, &data));
        }

        parse_generate_response(&data, &self.model)
    }

    /// Map an error response to a variant. Gemini reports a bad key as
    /// 400 INVALID_ARGUMENT with reason API_KEY_INVALID.
    fn error_from_response(&self, status: StatusCode, data: &Value) -> InkcheckError {
        let error = &data["error"];
        let message = error["message"].as_str().unwrap_or("Unknown");
        let message = truncate_error(&redact_credentials(message, &[self.api_key.as_str()]));

        let key_invalid = error["details"]
            .as_array()
            .map(|details| details.iter().any(|d| d["reason"] == "API_KEY_INVALID"))
            .unwrap_or(false)
            || message.contains("API key not valid");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN || key_invalid {
            InkcheckError::Authentication(format!("Gemini rejected the API key ({}): {}", status, message))
        } else if status.is_client_error() {
            InkcheckError::LLMRejected(format!("Gemini returned {}: {}", status, message))
        } else {
            InkcheckError::LLMApi(format!("Gemini returned {}: {}", status, message))
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> InkcheckError {
        let message = redact_credentials(&e.to_string(), &[self.api_key.as_str()]);
        if e.is_timeout() {
            InkcheckError::Timeout(format!("Gemini request timed out: {}", message))
        } else {
            InkcheckError::Network(format!("Gemini request failed: {}", message))
        }
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    async fn complete(&self, prompt: &str, system: Option<&str>) -> Result<LLMResponse, InkcheckError> {
        let text = match system {
            Some(sys) => format!("System: {}\n\n{}", sys, prompt),
            None => prompt.to_string(),
        };
        self.generate(vec![json!({ "text": text })]).await
    }

    async fn complete_with_image(&self, prompt: &str, image: &ImageInput) -> Result<LLMResponse, InkcheckError> {
        self.generate(vec![
            json!({ "text": prompt }),
            json!({ "inline_data": { "mime_type": image.mime_type, "data": image.base64() } }),
        ])
        .await
    }

    fn provider_name(&self) -> &str { "gemini" }
    fn model_name(&self) -> &str { &self.model }
}

/// Finish reasons that will repeat on retry.
const BLOCKING_FINISH_REASONS: &[&str] = &["SAFETY", "RECITATION", "BLOCKLIST", "PROHIBITED_CONTENT", "SPII"];

/// Pull the text and token counts out of a `generateContent` response.
/// Multiple text parts are concatenated; surrounding whitespace is trimmed.
fn parse_generate_response(data: &Value, model: &str) -> Result<LLMResponse, InkcheckError> {
    let candidate = &data["candidates"][0];
    let content: String = candidate["content"]["parts"]
        .as_array()
        .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
        .unwrap_or_default();

    if content.trim().is_empty() {
        if let Some(reason) = data["promptFeedback"]["blockReason"].as_str() {
            return Err(InkcheckError::LLMRejected(format!("Gemini blocked the prompt ({})", reason)));
        }
        let reason = candidate["finishReason"].as_str().unwrap_or("no candidates");
        if BLOCKING_FINISH_REASONS.contains(&reason) {
            return Err(InkcheckError::LLMRejected(format!("Gemini withheld the answer ({})", reason)));
        }
        return Err(InkcheckError::LLMApi(format!("Gemini returned no text ({})", reason)));
    }

    Ok(LLMResponse {
        content: content.trim().to_string(),
        input_tokens: data["usageMetadata"]["promptTokenCount"].as_u64(),
        output_tokens: data["usageMetadata"]["candidatesTokenCount"].as_u64(),
        model: model.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use crate::errors::{with_retry, RetryConfig};

    #[test]
    fn test_parse_joins_text_parts() {
        let data = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "  F = ma\n" }, { "text": "E = mc^2  " }] },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 7 }
        });
        let resp = parse_generate_response(&data, "gemini-1.5-flash").unwrap();
        assert_eq!(resp.content, "F = ma\nE = mc^2");
        assert_eq!(resp.input_tokens, Some(12));
        assert_eq!(resp.output_tokens, Some(7));
    }

    #[test]
    fn test_parse_blocked_prompt() {
        let data = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        let err = parse_generate_response(&data, "m").unwrap_err();
        assert!(matches!(err, InkcheckError::LLMRejected(_)));
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_parse_safety_finish_is_rejected() {
        let data = json!({ "candidates": [{ "finishReason": "RECITATION" }] });
        let err = parse_generate_response(&data, "m").unwrap_err();
        assert!(matches!(err, InkcheckError::LLMRejected(_)));

        let data = json!({ "candidates": [{ "finishReason": "MAX_TOKENS" }] });
        let err = parse_generate_response(&data, "m").unwrap_err();
        assert!(matches!(err, InkcheckError::LLMApi(_)));
    }

    /// Local Gemini stand-in that answers every request with `status` and
    /// `body`, counting the requests it sees.
    async fn stub_gemini(status: u16, body: Value) -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let app = axum::Router::new().fallback(move || {
            let counter = counter.clone();
            let body = body.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                (axum::http::StatusCode::from_u16(status).unwrap(), axum::Json(body))
            }
        });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/v1beta", addr), hits)
    }

    fn no_backoff() -> RetryConfig {
        RetryConfig { max_retries: 3, backoff: false }
    }

    #[tokio::test]
    async fn test_invalid_key_is_authentication_and_not_retried() {
        let body = json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT",
                "details": [{ "@type": "type.googleapis.com/google.rpc.ErrorInfo", "reason": "API_KEY_INVALID" }]
            }
        });
        let (base_url, hits) = stub_gemini(400, body).await;
        let provider = GeminiProvider::new("bad-key", None, Some(&base_url), Duration::from_secs(5)).unwrap();

        let err = with_retry("extraction", &no_backoff(), || provider.complete("hi", None))
            .await
            .unwrap_err();
        assert!(matches!(err, InkcheckError::Authentication(_)));
        assert_eq!(err.exit_code(), 4);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unknown_model_is_rejected_without_retry() {
        let body = json!({
            "error": { "code": 404, "message": "models/nope is not found", "status": "NOT_FOUND" }
        });
        let (base_url, hits) = stub_gemini(404, body).await;
        let provider = GeminiProvider::new("key", Some("nope"), Some(&base_url), Duration::from_secs(5)).unwrap();

        let err = with_retry("extraction", &no_backoff(), || provider.complete("hi", None))
            .await
            .unwrap_err();
        assert!(matches!(err, InkcheckError::LLMRejected(_)));
        assert!(err.to_string().contains("not found"));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_server_error_is_retried() {
        let body = json!({ "error": { "code": 500, "message": "internal", "status": "INTERNAL" } });
        let (base_url, hits) = stub_gemini(500, body).await;
        let provider = GeminiProvider::new("key", None, Some(&base_url), Duration::from_secs(5)).unwrap();

        let err = with_retry("extraction", &no_backoff(), || provider.complete("hi", None))
            .await
            .unwrap_err();
        assert!(matches!(err, InkcheckError::LLMApi(_)));
        assert_eq!(hits.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_endpoint_uses_model_and_base_url() {
        let provider = GeminiProvider::new(
            "key",
            Some("gemini-2.0-flash"),
            Some("http://localhost:9000/v1beta/"),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(provider.endpoint(), "http://localhost:9000/v1beta/models/gemini-2.0-flash:generateContent");
        assert_eq!(provider.model_name(), "gemini-2.0-flash");
    }
}
