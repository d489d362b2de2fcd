use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient, TextSplitter};
use crate::domain::{ContentType, FewShotExample, Taxonomy};
use crate::presentation::state::AppState;

#[derive(Debug, Serialize)]
pub struct ExamplesResponse {
    pub examples: Vec<FewShotExample>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct SupportedFormat {
    pub extension: &'static str,
    pub name: &'static str,
    pub supported: bool,
}

#[derive(Debug, Serialize)]
pub struct SupportedFormatsResponse {
    pub formats: Vec<SupportedFormat>,
}

pub async fn taxonomy_handler<F, L, T>(State(state): State<AppState<F, L, T>>) -> Json<Taxonomy>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    Json(state.identification_service.profile().taxonomy.clone())
}

pub async fn examples_handler<F, L, T>(
    State(state): State<AppState<F, L, T>>,
) -> Json<ExamplesResponse>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    let examples = state.identification_service.profile().examples.clone();
    Json(ExamplesResponse {
        total: examples.len(),
        examples,
    })
}

pub async fn supported_formats_handler<F, L, T>(
    State(state): State<AppState<F, L, T>>,
) -> Json<SupportedFormatsResponse>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    let formats = [ContentType::Pdf, ContentType::Docx, ContentType::Text]
        .into_iter()
        .map(|content_type| SupportedFormat {
            extension: content_type.extension(),
            name: content_type.display_name(),
            supported: state.is_format_enabled(content_type),
        })
        .collect();

    Json(SupportedFormatsResponse { formats })
}
