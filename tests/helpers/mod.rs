#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use clinical_components::application::ports::{
    FileLoader, FileLoaderError, LlmClient, LlmClientError,
};
use clinical_components::application::services::{IdentificationLimits, IdentificationService};
use clinical_components::domain::{ClassificationProfile, Document, ExtractedText};
use clinical_components::infrastructure::text_processing::ChunkPlanner;

pub const MOCK_MODEL: &str = "mock-model";

/// Replays queued responses in order; answers `[]` once the queue is drained.
pub struct ScriptedLlmClient {
    responses: Mutex<VecDeque<Result<String, LlmClientError>>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedLlmClient {
    pub fn new(responses: Vec<Result<String, LlmClientError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn replying(responses: &[&str]) -> Self {
        Self::new(responses.iter().map(|r| Ok(r.to_string())).collect())
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LlmClient for ScriptedLlmClient {
    async fn complete(
        &self,
        _system_instruction: &str,
        prompt: &str,
    ) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("[]".to_string()))
    }

    fn model_name(&self) -> &str {
        MOCK_MODEL
    }
}

type LoaderFn = dyn Fn(&[u8]) -> Result<ExtractedText, FileLoaderError> + Send + Sync;

pub struct MockFileLoader {
    extract: Box<LoaderFn>,
}

impl MockFileLoader {
    /// Decodes uploads as UTF-8, like a plain-text loader would.
    pub fn utf8() -> Self {
        Self {
            extract: Box::new(|data: &[u8]| {
                String::from_utf8(data.to_vec())
                    .map(ExtractedText::plain)
                    .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))
            }),
        }
    }

    pub fn returning(extracted: ExtractedText) -> Self {
        Self {
            extract: Box::new(move |_: &[u8]| Ok(extracted.clone())),
        }
    }

    pub fn failing(message: &'static str) -> Self {
        Self {
            extract: Box::new(move |_: &[u8]| {
                Err(FileLoaderError::ExtractionFailed(message.to_string()))
            }),
        }
    }
}

#[async_trait::async_trait]
impl FileLoader for MockFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        _document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        (self.extract)(data)
    }
}

pub type TestService = IdentificationService<MockFileLoader, ScriptedLlmClient, ChunkPlanner>;

pub fn build_service(
    file_loader: MockFileLoader,
    llm_client: Arc<ScriptedLlmClient>,
    max_chunk_chars: usize,
    limits: IdentificationLimits,
) -> TestService {
    IdentificationService::new(
        Arc::new(file_loader),
        llm_client,
        Arc::new(ChunkPlanner::new(max_chunk_chars)),
        Arc::new(ClassificationProfile::clinical_default()),
        limits,
    )
}

pub fn component_json(component_type: &str, title: &str, text: &str, page: u32) -> String {
    serde_json::json!({
        "type": component_type,
        "title": title,
        "text": text,
        "confidence": 0.9,
        "reuse_potential": "high",
        "rationale": "Recurs across protocols",
        "location": { "page": page, "section": null }
    })
    .to_string()
}

pub fn json_array(records: &[String]) -> String {
    format!("[{}]", records.join(","))
}
