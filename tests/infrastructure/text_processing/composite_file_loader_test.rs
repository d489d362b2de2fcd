use std::sync::Arc;

use clinical_components::application::ports::{FileLoader, FileLoaderError};
use clinical_components::domain::{ContentType, Document};
use clinical_components::infrastructure::text_processing::{
    CompositeFileLoader, DocxAdapter, PlainTextAdapter,
};

fn loader() -> CompositeFileLoader {
    let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
    let docx_adapter: Arc<dyn FileLoader> = Arc::new(DocxAdapter::new());
    CompositeFileLoader::new(vec![
        (ContentType::Text, text_adapter),
        (ContentType::Docx, docx_adapter),
    ])
}

#[tokio::test]
async fn given_text_document_when_loading_then_delegates_to_text_adapter() {
    let data = b"Hello plain text";
    let document = Document::new("readme.txt".to_string(), ContentType::Text, data.len() as u64);

    let extracted = loader().extract_text(data, &document).await.unwrap();

    assert_eq!(extracted.text, "Hello plain text");
}

#[tokio::test]
async fn given_docx_document_when_loading_then_delegates_to_docx_adapter() {
    let data = b"not a zip";
    let document = Document::new("sap.docx".to_string(), ContentType::Docx, data.len() as u64);

    let result = loader().extract_text(data, &document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_unregistered_content_type_when_loading_then_returns_unsupported() {
    let data = b"%PDF-1.7";
    let document = Document::new("protocol.pdf".to_string(), ContentType::Pdf, data.len() as u64);

    let result = loader().extract_text(data, &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}

#[test]
fn given_registered_adapters_when_querying_support_then_reports_each_format() {
    let loader = loader();

    assert!(loader.supports(ContentType::Text));
    assert!(loader.supports(ContentType::Docx));
    assert!(!loader.supports(ContentType::Pdf));
}
