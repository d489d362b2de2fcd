use std::sync::Arc;

use clinical_components::application::ports::LlmClientError;
use clinical_components::application::services::{
    ClassificationError, ClassificationMode, ComponentClassifier,
};
use clinical_components::domain::{ClassificationProfile, ComponentType};

use crate::helpers::{MOCK_MODEL, ScriptedLlmClient};

fn classifier(llm: Arc<ScriptedLlmClient>) -> ComponentClassifier<ScriptedLlmClient> {
    ComponentClassifier::new(llm, Arc::new(ClassificationProfile::clinical_default()))
}

#[tokio::test]
async fn given_valid_response_when_classifying_then_components_are_returned() {
    let llm = Arc::new(ScriptedLlmClient::replying(&[
        r#"[{"type": "boilerplate", "text": "This study will be conducted in accordance with GCP."}]"#,
    ]));
    let classifier = classifier(Arc::clone(&llm));

    let components = classifier
        .classify("Some protocol text", ClassificationMode::Document)
        .await
        .unwrap();

    assert_eq!(components.len(), 1);
    assert_eq!(components[0].component_type, ComponentType::Boilerplate);
    assert!(llm.prompts()[0].contains("Some protocol text"));
    assert_eq!(classifier.model_name(), MOCK_MODEL);
}

#[tokio::test]
async fn given_transport_failure_when_classifying_then_oracle_error_is_returned_without_retry() {
    let llm = Arc::new(ScriptedLlmClient::new(vec![Err(
        LlmClientError::ApiRequestFailed("connection reset".to_string()),
    )]));
    let classifier = classifier(Arc::clone(&llm));

    let result = classifier.classify("text", ClassificationMode::Text).await;

    assert!(matches!(
        result,
        Err(ClassificationError::Oracle(LlmClientError::ApiRequestFailed(_)))
    ));
    assert_eq!(llm.call_count(), 1);
}

#[tokio::test]
async fn given_non_array_response_when_classifying_then_parse_error_keeps_raw_text() {
    let llm = Arc::new(ScriptedLlmClient::replying(&[r#"{"type": "safety"}"#]));
    let classifier = classifier(llm);

    let result = classifier.classify("text", ClassificationMode::Text).await;

    match result {
        Err(ClassificationError::Parse { raw_response, .. }) => {
            assert_eq!(raw_response, r#"{"type": "safety"}"#)
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}
