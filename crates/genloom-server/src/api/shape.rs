//! Text-to-3D endpoints (point cloud and shape)

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use genloom_core::{Archetype, Mesh};
use serde::{Deserialize, Serialize};

use crate::api::payload::{parse_json, require_prompt};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PointCloudRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default = "default_style")]
    pub style: String,
}

fn default_style() -> String {
    "realistic".to_string()
}

#[derive(Debug, Serialize)]
pub struct PointCloudResponse {
    pub status: &'static str,
    pub prompt: String,
    pub mesh_data: Mesh,
    pub point_count: usize,
    pub format: &'static str,
    pub style: String,
}

#[derive(Debug, Deserialize)]
pub struct ShapeRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default = "default_guidance_scale")]
    pub guidance_scale: f64,
}

fn default_guidance_scale() -> f64 {
    15.0
}

#[derive(Debug, Serialize)]
pub struct ShapeResponse {
    pub status: &'static str,
    pub prompt: String,
    pub mesh_data: Mesh,
    pub archetype: Archetype,
    pub guidance_scale: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

pub async fn point_cloud(
    State(state): State<AppState>,
    payload: Result<Json<PointCloudRequest>, JsonRejection>,
) -> Result<Json<PointCloudResponse>, ApiError> {
    let PointCloudRequest { prompt, style } = parse_json(payload)?;
    let prompt = require_prompt(prompt)?;

    let generated = state
        .run_limited(async {
            state
                .service
                .generate_point_cloud(&prompt, Some(style.as_str()))
                .await
                .map_err(ApiError::from)
        })
        .await?;

    Ok(Json(PointCloudResponse {
        status: "success",
        prompt,
        point_count: generated.point_count,
        mesh_data: generated.mesh,
        format: "obj",
        style,
    }))
}

pub async fn shape(
    State(state): State<AppState>,
    payload: Result<Json<ShapeRequest>, JsonRejection>,
) -> Result<Json<ShapeResponse>, ApiError> {
    let ShapeRequest {
        prompt,
        style,
        guidance_scale,
    } = parse_json(payload)?;
    let prompt = require_prompt(prompt)?;

    let generated = state
        .run_limited(async {
            state
                .service
                .generate_shape(&prompt, style.as_deref(), Some(guidance_scale))
                .await
                .map_err(ApiError::from)
        })
        .await?;

    Ok(Json(ShapeResponse {
        status: "success",
        prompt,
        mesh_data: generated.mesh,
        archetype: generated.archetype,
        guidance_scale,
        style,
    }))
}
