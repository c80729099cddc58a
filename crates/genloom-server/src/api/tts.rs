//! Text-to-speech endpoint

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::api::payload::{parse_json, require_text};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub voice: Option<String>,
}

pub async fn speak(
    State(state): State<AppState>,
    payload: Result<Json<SpeakRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let SpeakRequest { text, voice } = parse_json(payload)?;
    let text = require_text(text, "Text required")?;

    let wav = state
        .run_limited(async {
            state
                .service
                .synthesize(&text, voice.as_deref())
                .await
                .map_err(ApiError::from)
        })
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "audio/wav"),
            (header::CONTENT_DISPOSITION, "inline; filename=\"speech.wav\""),
        ],
        wav,
    )
        .into_response())
}
