use serde::{Deserialize, Serialize};

pub const DEFAULT_PROVIDER: &str = "gemini";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_OUTPUT_DIR: &str = "./results";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct InkcheckConfig {
    pub llm: Option<LLMConfig>,
    pub output: Option<OutputConfig>,
    pub prompts: Option<PromptsConfig>,
    pub retry: Option<RetrySettings>,
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LLMConfig {
    pub provider: Option<String>,
    pub model: Option<String>,
    /// Literal key, or `$NAME` to read it from the environment.
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    pub directory: Option<String>,
    pub formats: Option<Vec<ExportFormat>>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Txt,
    Json,
    Markdown,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Txt, ExportFormat::Json, ExportFormat::Markdown];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Json => "json",
            Self::Markdown => "markdown",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct PromptsConfig {
    /// Directory holding `transcribe.txt` / `validate.txt` overrides.
    pub directory: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct RetrySettings {
    pub max_retries: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl InkcheckConfig {
    pub fn provider(&self) -> &str {
        self.llm.as_ref().and_then(|l| l.provider.as_deref()).unwrap_or(DEFAULT_PROVIDER)
    }

    pub fn model(&self) -> &str {
        self.llm.as_ref().and_then(|l| l.model.as_deref()).unwrap_or(DEFAULT_MODEL)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.llm.as_ref().and_then(|l| l.timeout_secs).unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    pub fn output_dir(&self) -> &str {
        self.output.as_ref().and_then(|o| o.directory.as_deref()).unwrap_or(DEFAULT_OUTPUT_DIR)
    }

    pub fn export_formats(&self) -> Vec<ExportFormat> {
        self.output
            .as_ref()
            .and_then(|o| o.formats.clone())
            .unwrap_or_else(|| ExportFormat::ALL.to_vec())
    }

    pub fn max_retries(&self) -> u32 {
        self.retry.as_ref().and_then(|r| r.max_retries).unwrap_or(3)
    }
}
