use clinical_components::application::ports::{LlmClient, LlmClientError};
use clinical_components::infrastructure::llm::OpenAiClient;
use clinical_components::presentation::LlmSettings;

fn settings(provider: &str) -> LlmSettings {
    LlmSettings {
        provider: provider.to_string(),
        api_key: "test-key".to_string(),
        base_url: None,
        azure_endpoint: None,
        chat_model: "gpt-4o-mini".to_string(),
        max_tokens: 4000,
        temperature: 0.0,
    }
}

#[test]
fn given_openai_provider_when_created_then_uses_public_endpoint() {
    let client = OpenAiClient::from_settings(&settings("openai")).unwrap();

    assert_eq!(client.base_url(), "https://api.openai.com/v1");
    assert_eq!(
        client.completions_url(),
        "https://api.openai.com/v1/chat/completions"
    );
    assert_eq!(client.model_name(), "gpt-4o-mini");
}

#[test]
fn given_lmstudio_with_base_url_when_created_then_trailing_slash_is_trimmed() {
    let mut settings = settings("lmstudio");
    settings.base_url = Some("http://localhost:1234/v1/".to_string());

    let client = OpenAiClient::from_settings(&settings).unwrap();

    assert_eq!(client.base_url(), "http://localhost:1234/v1");
}

#[test]
fn given_lmstudio_without_base_url_when_created_then_configuration_error() {
    let result = OpenAiClient::from_settings(&settings("lmstudio"));

    assert!(matches!(result, Err(LlmClientError::Configuration(_))));
}

#[test]
fn given_azure_provider_when_created_then_targets_versioned_deployment() {
    let mut settings = settings("azure");
    settings.azure_endpoint = Some("https://clinical.openai.azure.com/".to_string());

    let client = OpenAiClient::from_settings(&settings).unwrap();

    assert_eq!(
        client.base_url(),
        "https://clinical.openai.azure.com/openai/deployments/gpt-4o-mini"
    );
    assert!(client.completions_url().contains("/chat/completions?api-version="));
}

#[test]
fn given_azure_without_endpoint_when_created_then_configuration_error() {
    let result = OpenAiClient::from_settings(&settings("azure"));

    assert!(matches!(result, Err(LlmClientError::Configuration(_))));
}

#[test]
fn given_unknown_provider_when_created_then_configuration_error() {
    let result = OpenAiClient::from_settings(&settings("ollama"));

    assert!(matches!(result, Err(LlmClientError::Configuration(_))));
}

#[tokio::test]
async fn given_unreachable_endpoint_when_completing_then_api_request_failed() {
    let mut settings = settings("lmstudio");
    settings.base_url = Some("http://127.0.0.1:9".to_string());
    let client = OpenAiClient::from_settings(&settings).unwrap();

    let result = client.complete("system", "prompt").await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(_))));
}
