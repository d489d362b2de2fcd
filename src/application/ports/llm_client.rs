use async_trait::async_trait;

/// Request/response contract of the external classification oracle.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(
        &self,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String, LlmClientError>;

    fn model_name(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("configuration error: {0}")]
    Configuration(String),
}
