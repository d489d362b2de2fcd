use std::sync::Arc;

use crate::application::ports::{
    FileLoader, FileLoaderError, LlmClient, TextSplitter, TextSplitterError,
};
use crate::domain::{
    ClassificationProfile, Component, ComponentLocation, ContentType, Document,
};

use super::component_classifier::{ClassificationError, ComponentClassifier};
use super::prompt_builder::ClassificationMode;
use super::result_reconciler::ResultReconciler;

/// Input size limits applied before any oracle call.
#[derive(Debug, Clone, Copy)]
pub struct IdentificationLimits {
    pub min_input_chars: usize,
    pub max_document_chars: usize,
}

impl Default for IdentificationLimits {
    fn default() -> Self {
        Self {
            min_input_chars: 50,
            max_document_chars: 200_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextIdentification {
    pub components: Vec<Component>,
    pub text_length: usize,
}

#[derive(Debug, Clone)]
pub struct DocumentIdentification {
    pub filename: String,
    pub components: Vec<Component>,
    pub total_pages: Option<usize>,
    pub chunk_count: usize,
    pub failed_chunks: usize,
    pub truncated: bool,
    pub text_length: usize,
}

/// Runs extraction, chunk planning, per-chunk classification and
/// reconciliation for one request. Chunks are classified one after another.
pub struct IdentificationService<F, L, T: ?Sized>
where
    F: FileLoader,
    L: LlmClient,
    T: TextSplitter,
{
    file_loader: Arc<F>,
    classifier: ComponentClassifier<L>,
    text_splitter: Arc<T>,
    limits: IdentificationLimits,
}

impl<F, L, T: ?Sized> IdentificationService<F, L, T>
where
    F: FileLoader,
    L: LlmClient,
    T: TextSplitter,
{
    pub fn new(
        file_loader: Arc<F>,
        llm_client: Arc<L>,
        text_splitter: Arc<T>,
        profile: Arc<ClassificationProfile>,
        limits: IdentificationLimits,
    ) -> Self {
        Self {
            file_loader,
            classifier: ComponentClassifier::new(llm_client, profile),
            text_splitter,
            limits,
        }
    }

    pub fn profile(&self) -> &ClassificationProfile {
        self.classifier.profile()
    }

    pub fn model_name(&self) -> &str {
        self.classifier.model_name()
    }

    pub fn limits(&self) -> IdentificationLimits {
        self.limits
    }

    pub fn supports(&self, content_type: ContentType) -> bool {
        self.file_loader.supports(content_type)
    }

    /// Classifies directly submitted text as a single chunk. Any
    /// classification failure fails the request.
    #[tracing::instrument(skip(self, text), fields(text_chars = text.len()))]
    pub async fn identify_text(&self, text: &str) -> Result<TextIdentification, IdentificationError> {
        let text = text.trim();
        let text_length = self.ensure_min_length(text)?;

        // Pasted text carries no page markers, so locations are meaningless.
        let mut components = self
            .classifier
            .classify(text, ClassificationMode::Text)
            .await?;
        for component in &mut components {
            component.location = ComponentLocation::default();
        }

        tracing::info!(components = components.len(), "Text classified");

        Ok(TextIdentification {
            components,
            text_length,
        })
    }

    /// Extracts and classifies an uploaded document chunk by chunk. A chunk
    /// whose response does not parse contributes nothing and is counted in
    /// `failed_chunks`; any other failure aborts the request.
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn identify_document(
        &self,
        data: &[u8],
        filename: String,
        content_type: ContentType,
    ) -> Result<DocumentIdentification, IdentificationError> {
        let document = Document::new(filename, content_type, data.len() as u64);

        let extracted = self.file_loader.extract_text(data, &document).await?;
        self.ensure_min_length(extracted.text.trim())?;

        let (text, capped) = cap_chars(extracted.text, self.limits.max_document_chars);
        if capped {
            tracing::warn!(
                max_document_chars = self.limits.max_document_chars,
                "Document truncated before chunking"
            );
        }
        let text_length = text.chars().count();

        let plan = self.text_splitter.split(&text, document.id).await?;
        let chunk_count = plan.len();
        let truncated = capped || plan.split_mid_content;

        let mut reconciler = ResultReconciler::new();
        let mut failed_chunks = 0;

        for chunk in plan.chunks {
            match self
                .classifier
                .classify(&chunk.text, ClassificationMode::Document)
                .await
            {
                Ok(components) => {
                    let received = components.len();
                    let kept = reconciler.absorb(components);
                    tracing::debug!(
                        chunk = chunk.index,
                        first_page = chunk.page,
                        offset = chunk.offset,
                        chars = chunk.char_len(),
                        received,
                        kept,
                        "Chunk reconciled"
                    );
                }
                Err(ClassificationError::Parse {
                    message,
                    raw_response,
                }) => {
                    failed_chunks += 1;
                    tracing::warn!(
                        chunk = chunk.index,
                        error = %message,
                        response_chars = raw_response.len(),
                        "Chunk response unparseable, continuing without it"
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        let components = reconciler.into_components();

        tracing::info!(
            document_id = %document.id.as_uuid(),
            chunk_count,
            failed_chunks,
            components = components.len(),
            truncated,
            "Document classified"
        );

        Ok(DocumentIdentification {
            filename: document.filename,
            components,
            total_pages: extracted.page_count,
            chunk_count,
            failed_chunks,
            truncated,
            text_length,
        })
    }

    fn ensure_min_length(&self, text: &str) -> Result<usize, IdentificationError> {
        let length = text.chars().count();
        if length < self.limits.min_input_chars {
            return Err(IdentificationError::InputTooShort {
                length,
                minimum: self.limits.min_input_chars,
            });
        }
        Ok(length)
    }
}

fn cap_chars(text: String, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => (text[..byte_index].to_string(), true),
        None => (text, false),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IdentificationError {
    #[error("extraction: {0}")]
    Extraction(#[from] FileLoaderError),
    #[error("text is too short ({length} characters, at least {minimum} required)")]
    InputTooShort { length: usize, minimum: usize },
    #[error("chunking: {0}")]
    Splitting(#[from] TextSplitterError),
    #[error(transparent)]
    Classification(#[from] ClassificationError),
}
