use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient, TextSplitter};
use crate::application::services::IdentificationService;
use crate::domain::ContentType;
use crate::presentation::config::Settings;

/// Shared, read-only request state. Built once in `main`.
pub struct AppState<F, L, T: ?Sized>
where
    F: FileLoader,
    L: LlmClient,
    T: TextSplitter,
{
    pub identification_service: Arc<IdentificationService<F, L, T>>,
    pub settings: Settings,
}

impl<F, L, T: ?Sized> AppState<F, L, T>
where
    F: FileLoader,
    L: LlmClient,
    T: TextSplitter,
{
    pub fn new(identification_service: Arc<IdentificationService<F, L, T>>, settings: Settings) -> Self {
        Self {
            identification_service,
            settings,
        }
    }

    /// Formats without a registered extractor are reported and rejected as
    /// unsupported.
    pub fn is_format_enabled(&self, content_type: ContentType) -> bool {
        self.identification_service.supports(content_type)
    }
}

impl<F, L, T: ?Sized> Clone for AppState<F, L, T>
where
    F: FileLoader,
    L: LlmClient,
    T: TextSplitter,
{
    fn clone(&self) -> Self {
        Self {
            identification_service: Arc::clone(&self.identification_service),
            settings: self.settings.clone(),
        }
    }
}
