use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::presentation::config::LlmSettings;

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const AZURE_API_VERSION: &str = "2024-06-01";

/// Chat-completions client for OpenAI-compatible endpoints.
pub struct OpenAiClient {
    client: Client,
    provider: String,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiClient {
    pub fn from_settings(settings: &LlmSettings) -> Result<Self, LlmClientError> {
        let base_url = match settings.provider.as_str() {
            "openai" => settings
                .base_url
                .as_deref()
                .unwrap_or(OPENAI_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            "lmstudio" => settings
                .base_url
                .as_deref()
                .ok_or_else(|| {
                    LlmClientError::Configuration(
                        "base_url required for lmstudio provider".to_string(),
                    )
                })?
                .trim_end_matches('/')
                .to_string(),
            "azure" => {
                let endpoint = settings.azure_endpoint.as_deref().ok_or_else(|| {
                    LlmClientError::Configuration(
                        "azure_endpoint required for azure provider".to_string(),
                    )
                })?;
                format!(
                    "{}/openai/deployments/{}",
                    endpoint.trim_end_matches('/'),
                    settings.chat_model
                )
            }
            other => {
                return Err(LlmClientError::Configuration(format!(
                    "unknown provider: {other}"
                )));
            }
        };

        Ok(Self {
            client: Client::new(),
            provider: settings.provider.clone(),
            base_url,
            api_key: settings.api_key.clone(),
            model: settings.chat_model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Azure deployments are versioned through a query parameter.
    pub fn completions_url(&self) -> String {
        if self.provider == "azure" {
            format!(
                "{}/chat/completions?api-version={AZURE_API_VERSION}",
                self.base_url
            )
        } else {
            format!("{}/chat/completions", self.base_url)
        }
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.provider == "azure" {
            request.header("api-key", &self.api_key)
        } else {
            request.header("Authorization", format!("Bearer {}", self.api_key))
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    #[tracing::instrument(skip(self, system_instruction, prompt), fields(model = %self.model, prompt_chars = prompt.len()))]
    async fn complete(
        &self,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String, LlmClientError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_instruction.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let request = self
            .client
            .post(self.completions_url())
            .json(&request_body);
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        completion_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| LlmClientError::InvalidResponse("empty choices".to_string()))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
