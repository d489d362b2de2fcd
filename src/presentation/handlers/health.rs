use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient, TextSplitter};
use crate::presentation::state::AppState;

pub const SERVICE_NAME: &str = "Clinical Component Identifier (Few-Shot)";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub model: String,
    pub examples: usize,
}

pub async fn health_handler<F, L, T>(State(state): State<AppState<F, L, T>>) -> Json<HealthResponse>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    let service = &state.identification_service;

    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        model: service.model_name().to_string(),
        examples: service.profile().examples.len(),
    })
}
