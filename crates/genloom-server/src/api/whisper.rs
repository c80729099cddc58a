//! Speech-to-text endpoint (multipart upload)

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_FILENAME: &str = "audio.wav";

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub transcript: String,
    pub confidence: f32,
    pub language: String,
}

struct UploadedAudio {
    bytes: Vec<u8>,
    filename: String,
}

pub async fn transcribe(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let multipart =
        multipart.map_err(|e| ApiError::bad_request(format!("Invalid multipart payload: {e}")))?;
    let upload = read_audio_field(multipart)
        .await?
        .ok_or_else(|| ApiError::bad_request("Audio file required"))?;

    let result = state
        .run_limited(async {
            state
                .service
                .transcribe(upload.bytes, &upload.filename)
                .await
                .map_err(ApiError::from)
        })
        .await?;

    Ok(Json(TranscribeResponse {
        transcript: result.transcript,
        confidence: result.confidence,
        language: result.language,
    }))
}

/// Pull the `audio` file field; other fields are ignored.
async fn read_audio_field(mut multipart: Multipart) -> Result<Option<UploadedAudio>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed reading multipart field: {e}")))?
    {
        if field.name() != Some("audio") {
            continue;
        }
        let filename = field
            .file_name()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_FILENAME)
            .to_string();
        let bytes = field.bytes().await.map_err(|e| {
            ApiError::bad_request(format!("Failed reading multipart 'audio' field: {e}"))
        })?;
        if bytes.is_empty() {
            return Ok(None);
        }
        return Ok(Some(UploadedAudio {
            bytes: bytes.to_vec(),
            filename,
        }));
    }
    Ok(None)
}
