//! Text generation endpoint

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::payload::{parse_json, require_prompt};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LlmRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LlmResponse {
    pub response: String,
    pub model: String,
    pub tokens: usize,
}

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<LlmRequest>, JsonRejection>,
) -> Result<Json<LlmResponse>, ApiError> {
    let LlmRequest { prompt, model } = parse_json(payload)?;
    let prompt = require_prompt(prompt)?;

    let result = state
        .run_limited(async {
            Ok(state
                .service
                .generate_text(&prompt, model.as_deref())
                .await)
        })
        .await?;

    Ok(Json(LlmResponse {
        response: result.response,
        model: result.model,
        tokens: result.tokens,
    }))
}
