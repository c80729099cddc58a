//! Model slot management endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use genloom_core::{parse_model_kind, ModelInfo, ModelKind};
use serde::Serialize;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelInfo>,
}

pub async fn list_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: state.service.list_models().await,
    })
}

pub async fn get_model_info(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ModelInfo>, ApiError> {
    let kind = parse_kind(&name)?;
    find_info(&state, kind).await.map(Json)
}

pub async fn load_model(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ModelInfo>, ApiError> {
    let kind = parse_kind(&name)?;
    info!("Load requested for {}", kind);
    state.service.registry().load(kind).await?;
    find_info(&state, kind).await.map(Json)
}

pub async fn unload_model(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ModelInfo>, ApiError> {
    let kind = parse_kind(&name)?;
    info!("Unload requested for {}", kind);
    state.service.registry().unload(kind).await;
    find_info(&state, kind).await.map(Json)
}

fn parse_kind(name: &str) -> Result<ModelKind, ApiError> {
    parse_model_kind(name).map_err(|e| ApiError::not_found(e.to_string()))
}

async fn find_info(state: &AppState, kind: ModelKind) -> Result<ModelInfo, ApiError> {
    state
        .service
        .list_models()
        .await
        .into_iter()
        .find(|info| info.name == kind.name())
        .ok_or_else(|| ApiError::not_found("Model not found"))
}
