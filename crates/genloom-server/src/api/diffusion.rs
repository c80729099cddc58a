//! Text-to-image endpoint

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use genloom_core::ImageRequest;
use serde::Deserialize;

use crate::api::payload::{parse_json, require_prompt};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DiffusionRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub negative_prompt: String,
    #[serde(default = "default_steps")]
    pub steps: i64,
    #[serde(default = "default_guidance_scale")]
    pub guidance_scale: f64,
}

fn default_steps() -> i64 {
    20
}

fn default_guidance_scale() -> f64 {
    7.5
}

impl DiffusionRequest {
    fn into_image_request(self) -> Result<ImageRequest, ApiError> {
        Ok(ImageRequest {
            prompt: require_prompt(self.prompt)?,
            negative_prompt: self.negative_prompt,
            steps: self.steps,
            guidance_scale: self.guidance_scale,
        })
    }
}

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<DiffusionRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let request = parse_json(payload)?.into_image_request()?;

    let png = state
        .run_limited(async {
            state
                .service
                .generate_image(&request)
                .await
                .map_err(ApiError::from)
        })
        .await?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}
