use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, LlmClient, TextSplitter};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    examples_handler, health_handler, identify_handler, supported_formats_handler,
    taxonomy_handler, upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<F, L, T>(state: AppState<F, L, T>) -> Router
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let max_upload_bytes = state.settings.classification.max_upload_bytes;

    Router::new()
        .route("/", get(health_handler::<F, L, T>))
        .route("/health", get(health_handler::<F, L, T>))
        .route("/api/identify", post(identify_handler::<F, L, T>))
        .route("/api/upload", post(upload_handler::<F, L, T>))
        .route("/api/taxonomy", get(taxonomy_handler::<F, L, T>))
        .route("/api/examples", get(examples_handler::<F, L, T>))
        .route(
            "/api/supported-formats",
            get(supported_formats_handler::<F, L, T>),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
