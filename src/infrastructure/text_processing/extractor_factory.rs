use std::sync::Arc;

use crate::application::ports::FileLoader;
use crate::domain::ContentType;
use crate::presentation::config::ExtractionSettings;

use super::{CompositeFileLoader, DocxAdapter, PdfAdapter, PlainTextAdapter};

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Registers one adapter per enabled format. Plain text is always available.
    pub fn create(settings: &ExtractionSettings) -> CompositeFileLoader {
        let mut adapters: Vec<(ContentType, Arc<dyn FileLoader>)> =
            vec![(ContentType::Text, Arc::new(PlainTextAdapter))];

        if settings.pdf_enabled {
            tracing::info!("Registering PDF extraction adapter");
            adapters.push((ContentType::Pdf, Arc::new(PdfAdapter::new())));
        }

        if settings.docx_enabled {
            tracing::info!("Registering DOCX extraction adapter");
            adapters.push((ContentType::Docx, Arc::new(DocxAdapter::new())));
        }

        CompositeFileLoader::new(adapters)
    }
}
