use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use genloom_core::ServerConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::{diffusion, info, llm, models, shape, tts, whisper};
use crate::state::AppState;

/// Create the main API router.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(info::root))
        .route("/health", get(info::health_check))
        // Model slots
        .route("/models", get(models::list_models))
        .route("/models/:name", get(models::get_model_info))
        .route("/models/:name/load", post(models::load_model))
        .route("/models/:name/unload", post(models::unload_model))
        // Generation
        .route("/llm/generate", post(llm::generate))
        .route("/point-e/generate", post(shape::point_cloud))
        .route("/shap-e/generate", post(shape::shape))
        .route("/whisper/transcribe", post(whisper::transcribe))
        .route("/tts/speak", post(tts::speak))
        .route("/stable-diffusion/generate", post(diffusion::generate))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
