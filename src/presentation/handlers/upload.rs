use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient, TextSplitter};
use crate::domain::{Component, ContentType};
use crate::presentation::handlers::error::ApiError;
use crate::presentation::handlers::identify::METHOD;
use crate::presentation::state::AppState;

pub const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub components: Vec<Component>,
    pub total_components: usize,
    pub total_pages: Option<usize>,
    pub chunk_count: usize,
    pub failed_chunks: usize,
    pub truncated: bool,
    pub text_length: usize,
    pub filename: String,
    pub model: String,
    pub method: &'static str,
    pub examples_used: usize,
}

struct UploadedFile {
    filename: String,
    mime: Option<String>,
    data: Vec<u8>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<F, L, T>(
    State(state): State<AppState<F, L, T>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    let upload = read_file_field(multipart).await?;

    // The extension decides; browsers often send a generic MIME type.
    let content_type = ContentType::from_filename(&upload.filename)
        .or_else(|| upload.mime.as_deref().and_then(ContentType::from_mime))
        .filter(|ct| state.is_format_enabled(*ct))
        .ok_or_else(|| {
            ApiError::new(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                format!("Unsupported file type. Supported: {}", supported_list(&state)),
            )
        })?;

    tracing::debug!(
        filename = %upload.filename,
        content_type = content_type.as_mime(),
        bytes = upload.data.len(),
        "File upload received"
    );

    let service = &state.identification_service;
    let result = service
        .identify_document(&upload.data, upload.filename, content_type)
        .await?;

    Ok(Json(UploadResponse {
        success: true,
        total_components: result.components.len(),
        components: result.components,
        total_pages: result.total_pages,
        chunk_count: result.chunk_count,
        failed_chunks: result.failed_chunks,
        truncated: result.truncated,
        text_length: result.text_length,
        filename: result.filename,
        model: service.model_name().to_string(),
        method: METHOD,
        examples_used: service.profile().examples.len(),
    }))
}

async fn read_file_field(mut multipart: Multipart) -> Result<UploadedFile, ApiError> {
    loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::new(e.status(), format!("Failed to read upload: {}", e.body_text())))?
            .ok_or_else(|| ApiError::bad_request("No file provided"))?;

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(ApiError::bad_request("No file selected"));
        }
        let mime = field.content_type().map(str::to_string);

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::new(e.status(), format!("Failed to read upload: {}", e.body_text())))?;

        return Ok(UploadedFile {
            filename,
            mime,
            data: data.to_vec(),
        });
    }
}

fn supported_list<F, L, T>(state: &AppState<F, L, T>) -> String
where
    F: FileLoader,
    L: LlmClient,
    T: TextSplitter + ?Sized,
{
    [ContentType::Pdf, ContentType::Docx, ContentType::Text]
        .into_iter()
        .filter(|ct| state.is_format_enabled(*ct))
        .map(|ct| ct.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}
