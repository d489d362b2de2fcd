use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient, TextSplitter};
use crate::domain::Component;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::handlers::error::ApiError;
use crate::presentation::state::AppState;

pub const METHOD: &str = "few-shot";

#[derive(Debug, Deserialize)]
pub struct IdentifyRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IdentifyResponse {
    pub success: bool,
    pub components: Vec<Component>,
    pub total_components: usize,
    pub text_length: usize,
    pub model: String,
    pub method: &'static str,
    pub examples_used: usize,
}

#[tracing::instrument(skip(state, payload))]
pub async fn identify_handler<F, L, T>(
    State(state): State<AppState<F, L, T>>,
    payload: Result<Json<IdentifyRequest>, JsonRejection>,
) -> Result<Json<IdentifyResponse>, ApiError>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    let text = match payload {
        Ok(Json(IdentifyRequest { text: Some(text) })) => text,
        Ok(_) => return Err(ApiError::bad_request("Missing 'text' field in request body")),
        Err(rejection) => {
            return Err(ApiError::bad_request(format!(
                "Invalid request body: {}",
                rejection.body_text()
            )));
        }
    };

    tracing::debug!(preview = %sanitize_prompt(&text), "Identify request received");

    let service = &state.identification_service;
    let result = service.identify_text(&text).await?;

    Ok(Json(IdentifyResponse {
        success: true,
        total_components: result.components.len(),
        components: result.components,
        text_length: result.text_length,
        model: service.model_name().to_string(),
        method: METHOD,
        examples_used: service.profile().examples.len(),
    }))
}
