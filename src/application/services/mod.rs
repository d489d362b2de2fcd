mod component_classifier;
mod identification_service;
mod prompt_builder;
mod response_parser;
mod result_reconciler;

pub use component_classifier::{ClassificationError, ComponentClassifier};
pub use identification_service::{
    DocumentIdentification, IdentificationError, IdentificationLimits, IdentificationService,
    TextIdentification,
};
pub use prompt_builder::{
    ClassificationMode, DOCUMENT_SYSTEM_INSTRUCTION, PromptBuilder, TEXT_SYSTEM_INSTRUCTION,
};
pub use response_parser::{
    DEFAULT_CONFIDENCE, DEFAULT_TITLE, ResponseParseError, coerce_component, coerce_confidence,
    parse_components, strip_code_fence,
};
pub use result_reconciler::{DEDUP_PREFIX_CHARS, ResultReconciler, dedup_key};
