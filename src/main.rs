use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use clinical_components::application::services::IdentificationService;
use clinical_components::domain::ClassificationProfile;
use clinical_components::infrastructure::llm::OpenAiClient;
use clinical_components::infrastructure::observability::{TracingConfig, init_tracing};
use clinical_components::infrastructure::text_processing::{ChunkPlanner, ExtractorFactory};
use clinical_components::presentation::{AppState, Environment, Settings, create_router};

const API_KEY_VARIABLE: &str = "OPENAI_API_KEY";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let mut settings = Settings::load(environment).context("failed to load settings")?;

    if settings.llm.api_key.is_empty() {
        settings.llm.api_key = std::env::var(API_KEY_VARIABLE).unwrap_or_default();
    }

    init_tracing(&TracingConfig {
        environment: environment.to_string(),
        level: settings.logging.level.clone(),
        json_format: settings.logging.enable_json || environment.prefers_json_logs(),
    });

    if settings.llm.api_key.is_empty() && settings.llm.provider != "lmstudio" {
        tracing::warn!("No API key configured; set {API_KEY_VARIABLE} or APP_LLM__API_KEY");
    }

    let file_loader = Arc::new(ExtractorFactory::create(&settings.extraction));
    let text_splitter = Arc::new(ChunkPlanner::new(settings.classification.max_chunk_chars));
    let llm_client =
        Arc::new(OpenAiClient::from_settings(&settings.llm).context("invalid llm settings")?);
    let profile = Arc::new(ClassificationProfile::clinical_default());

    tracing::info!(
        provider = %settings.llm.provider,
        model = %settings.llm.chat_model,
        examples = profile.examples.len(),
        max_chunk_chars = settings.classification.max_chunk_chars,
        pdf_enabled = settings.extraction.pdf_enabled,
        docx_enabled = settings.extraction.docx_enabled,
        "Classification pipeline configured"
    );

    let identification_service = Arc::new(IdentificationService::new(
        file_loader,
        llm_client,
        text_splitter,
        profile,
        settings.classification.limits(),
    ));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let router = create_router(AppState::new(identification_service, settings));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, router).await?;

    Ok(())
}
