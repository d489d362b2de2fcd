use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document, ExtractedText};

use super::page_aggregator::aggregate_pages;
use super::text_normalizer::normalize_pages;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Extracts PDFs page by page into a page-tagged document.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// One raw string per page in source order; pages that fail to extract
    /// come back empty so later page numbers stay aligned with the source.
    fn extract_raw_pages(path: &std::path::Path) -> Result<Vec<String>, FileLoaderError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            let text = doc.extract_text(page_index).unwrap_or_else(|e| {
                tracing::warn!(page = page_index + 1, error = %e, "Page text extraction failed");
                String::new()
            });
            pages.push(text);
        }

        Ok(pages)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let mut temp_file = tempfile::Builder::new()
            .suffix(ContentType::Pdf.extension())
            .tempfile()
            .map_err(|e| {
                FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
            })?;

        temp_file.write_all(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();

        let raw_pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_raw_pages(&temp_path)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        let source_pages = raw_pages.len();
        let pages = normalize_pages(&raw_pages);

        tracing::info!(
            source_pages,
            text_pages = pages.len(),
            "PDF text extraction complete"
        );

        if pages.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(ExtractedText::paged(aggregate_pages(&pages), pages.len()))
    }
}
