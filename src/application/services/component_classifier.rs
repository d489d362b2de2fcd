use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{ClassificationProfile, Component};

use super::prompt_builder::{ClassificationMode, PromptBuilder};
use super::response_parser::parse_components;

/// Turns one chunk of text into components through a single oracle call.
pub struct ComponentClassifier<L>
where
    L: LlmClient + ?Sized,
{
    llm_client: Arc<L>,
    profile: Arc<ClassificationProfile>,
    prompt_builder: PromptBuilder,
}

impl<L> ComponentClassifier<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(llm_client: Arc<L>, profile: Arc<ClassificationProfile>) -> Self {
        let prompt_builder = PromptBuilder::new(&profile);
        Self {
            llm_client,
            profile,
            prompt_builder,
        }
    }

    pub fn profile(&self) -> &ClassificationProfile {
        &self.profile
    }

    pub fn model_name(&self) -> &str {
        self.llm_client.model_name()
    }

    /// Oracle failures are returned as-is and never retried. A response that
    /// does not parse keeps the raw text for diagnosis.
    pub async fn classify(
        &self,
        text: &str,
        mode: ClassificationMode,
    ) -> Result<Vec<Component>, ClassificationError> {
        let prompt = self.prompt_builder.build(text);

        let response = self
            .llm_client
            .complete(mode.system_instruction(), &prompt)
            .await
            .map_err(ClassificationError::Oracle)?;

        let components = parse_components(&response, &self.profile).map_err(|e| {
            ClassificationError::Parse {
                message: e.to_string(),
                raw_response: response.clone(),
            }
        })?;

        tracing::debug!(
            components = components.len(),
            response_chars = response.len(),
            "Chunk classified"
        );

        Ok(components)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("oracle request failed: {0}")]
    Oracle(LlmClientError),
    #[error("failed to parse model response as JSON: {message}")]
    Parse {
        message: String,
        raw_response: String,
    },
}
