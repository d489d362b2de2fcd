use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::IdentificationLimits;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub classification: ClassificationSettings,
    pub extraction: ExtractionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub azure_endpoint: Option<String>,
    pub chat_model: String,
    pub max_tokens: usize,
    #[serde(default)]
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationSettings {
    pub max_chunk_chars: usize,
    pub max_document_chars: usize,
    pub min_input_chars: usize,
    pub max_upload_bytes: usize,
}

impl ClassificationSettings {
    pub fn limits(&self) -> IdentificationLimits {
        IdentificationLimits {
            min_input_chars: self.min_input_chars,
            max_document_chars: self.max_document_chars,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub pdf_enabled: bool,
    pub docx_enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers built-in defaults, the optional `appsettings.<Environment>.toml`
    /// file and `APP_`-prefixed variables (`APP_LLM__CHAT_MODEL=...`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("llm.provider", "openai")?
            .set_default("llm.chat_model", "gpt-4o-mini")?
            .set_default("llm.max_tokens", 8000)?
            .set_default("llm.temperature", 0.0)?
            .set_default("classification.max_chunk_chars", 12_000)?
            .set_default("classification.max_document_chars", 200_000)?
            .set_default("classification.min_input_chars", 50)?
            .set_default("classification.max_upload_bytes", 16 * 1024 * 1024)?
            .set_default("extraction.pdf_enabled", true)?
            .set_default("extraction.docx_enabled", true)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
