use std::path::PathBuf;
use crate::errors::InkcheckError;
use tracing::debug;

/// Prompt sent with the uploaded image.
pub const TRANSCRIBE: &str = "transcribe";
/// Prompt sent with the transcription to obtain corrections.
pub const VALIDATE: &str = "validate";

const BUILTIN_TRANSCRIBE: &str = "\
Extract all visible content from this image (text, formulas, notes, etc.) as clearly as possible.";

const BUILTIN_VALIDATE: &str = "\
You are an expert tutor.

Review the following content extracted from a handwritten image:

{{EXTRACTED_TEXT}}

Your task:
- Identify any incorrect facts or formulas.
- Correct them.
- Explain the correct concept clearly, as a tutor would to a student.

Use a friendly tone, and keep your explanations simple and clear.
";

/// Variables available for template interpolation in prompt files.
#[derive(Debug, Clone, Default)]
pub struct PromptVariables {
    pub extracted_text: Option<String>,
}

/// Resolves prompt templates, preferring `<dir>/<name>.txt` over the
/// built-in text when an override directory is configured.
#[derive(Debug, Clone, Default)]
pub struct PromptLoader {
    prompts_dir: Option<PathBuf>,
}

impl PromptLoader {
    pub fn new(prompts_dir: Option<PathBuf>) -> Self {
        debug!(dir = ?prompts_dir, "PromptLoader initialized");
        Self { prompts_dir }
    }

    /// Load a prompt template by name (without .txt extension).
    pub async fn load(&self, prompt_name: &str) -> Result<String, InkcheckError> {
        if let Some(dir) = &self.prompts_dir {
            let file_path = dir.join(format!("{}.txt", prompt_name));
            match tokio::fs::read_to_string(&file_path).await {
                Ok(content) => {
                    debug!(path = %file_path.display(), "Using prompt override");
                    return Ok(content);
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(InkcheckError::Prompt(format!(
                        "Failed to read prompt {}: {}",
                        file_path.display(),
                        e
                    )))
                }
            }
        }

        match prompt_name {
            TRANSCRIBE => Ok(BUILTIN_TRANSCRIBE.to_string()),
            VALIDATE => Ok(BUILTIN_VALIDATE.to_string()),
            other => Err(InkcheckError::Prompt(format!("Unknown prompt: {}", other))),
        }
    }

    /// Load and interpolate in one step.
    pub async fn render(&self, prompt_name: &str, vars: &PromptVariables) -> Result<String, InkcheckError> {
        Ok(self.interpolate(&self.load(prompt_name).await?, vars))
    }

    /// Replace {{VARIABLE}} placeholders with values from PromptVariables.
    /// None values become empty string.
    pub fn interpolate(&self, template: &str, vars: &PromptVariables) -> String {
        template.replace("{{EXTRACTED_TEXT}}", vars.extracted_text.as_deref().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builtin_prompts() {
        let loader = PromptLoader::default();
        assert!(loader.load(TRANSCRIBE).await.unwrap().contains("formulas"));
        assert!(loader.load(VALIDATE).await.unwrap().contains("{{EXTRACTED_TEXT}}"));
    }

    #[tokio::test]
    async fn test_render_validate_prompt() {
        let loader = PromptLoader::default();
        let vars = PromptVariables { extracted_text: Some("a^2 + b^2 = c^3".into()) };
        let prompt = loader.render(VALIDATE, &vars).await.unwrap();
        assert!(prompt.contains("a^2 + b^2 = c^3"));
        assert!(!prompt.contains("{{"));
    }

    #[tokio::test]
    async fn test_override_directory_wins() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("validate.txt"), "Check: {{EXTRACTED_TEXT}}").await.unwrap();
        let loader = PromptLoader::new(Some(dir.path().to_path_buf()));

        let vars = PromptVariables { extracted_text: Some("x".into()) };
        assert_eq!(loader.render(VALIDATE, &vars).await.unwrap(), "Check: x");
        // No override file for this one: falls back to the built-in.
        assert!(loader.load(TRANSCRIBE).await.unwrap().contains("image"));
    }

    #[tokio::test]
    async fn test_unknown_prompt_returns_error() {
        let loader = PromptLoader::default();
        assert!(matches!(loader.load("summary").await, Err(InkcheckError::Prompt(_))));
    }

    #[tokio::test]
    async fn test_unreadable_override_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be cannot be read as text.
        tokio::fs::create_dir(dir.path().join("transcribe.txt")).await.unwrap();
        let loader = PromptLoader::new(Some(dir.path().to_path_buf()));
        assert!(matches!(loader.load(TRANSCRIBE).await, Err(InkcheckError::Prompt(_))));
    }
}
