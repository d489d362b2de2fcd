use async_trait::async_trait;

use crate::domain::{ContentType, Document, ExtractedText};

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedText, FileLoaderError>;

    /// Whether `extract_text` accepts documents of this type.
    fn supports(&self, _content_type: ContentType) -> bool {
        true
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no text found in {0}")]
    NoTextFound(String),
}
