use async_trait::async_trait;
use crate::errors::InkcheckError;
use super::types::{ImageInput, LLMResponse};

#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Free-form text completion
    async fn complete(
        &self,
        prompt: &str,
        system: Option<&str>,
    ) -> Result<LLMResponse, InkcheckError>;

    /// Completion over a prompt plus one inline image
    async fn complete_with_image(
        &self,
        prompt: &str,
        image: &ImageInput,
    ) -> Result<LLMResponse, InkcheckError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;

    /// Model identifier
    fn model_name(&self) -> &str;
}
