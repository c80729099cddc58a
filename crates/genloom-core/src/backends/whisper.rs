//! Speech-to-text backends.

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::{Error, Result};

/// Returned in place of a transcript when the remote daemon fails.
pub const TRANSCRIPTION_FAILED: &str = "[ERROR] Transcription failed";

#[derive(Debug, Deserialize)]
struct WhisperResponse {
    text: String,
}

/// Client for a whisper.cpp-style `/inference` endpoint.
#[derive(Debug, Clone)]
pub struct WhisperClient {
    http: Client,
    base_url: String,
}

impl WhisperClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub async fn transcribe(&self, audio: Vec<u8>, filename: &str) -> Result<String> {
        let url = format!("{}/inference", self.base_url);
        debug!("Whisper request to {} ({} bytes)", url, audio.len());

        let file = Part::bytes(audio)
            .file_name(filename.to_string())
            .mime_str("audio/wav")?;
        let form = Form::new()
            .part("file", file)
            .text("response_format", "json");

        let response = self.http.post(&url).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::InferenceError(format!(
                "Whisper request failed: {}",
                status.as_u16()
            )));
        }

        let body: WhisperResponse = response.json().await?;
        Ok(body.text.trim().to_string())
    }
}

/// Speech-to-text backend selected by the registry.
#[derive(Debug, Clone)]
pub enum Transcriber {
    Remote(WhisperClient),
    Placeholder,
}

impl Transcriber {
    /// Transcribe an uploaded clip.
    ///
    /// Remote failures do not fail the request; they are logged and the
    /// transcript becomes [`TRANSCRIPTION_FAILED`].
    pub async fn transcribe(&self, audio: Vec<u8>, filename: &str) -> String {
        match self {
            Transcriber::Remote(client) => match client.transcribe(audio, filename).await {
                Ok(text) => text,
                Err(err) => {
                    error!("Whisper transcription failed: {}", err);
                    TRANSCRIPTION_FAILED.to_string()
                }
            },
            Transcriber::Placeholder => placeholder_transcript(filename),
        }
    }
}

pub(crate) fn placeholder_transcript(filename: &str) -> String {
    let basename = filename
        .rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or("audio.wav");
    format!("[FALLBACK] Transcribed audio from {}", basename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_uses_basename() {
        assert_eq!(
            placeholder_transcript("/tmp/uploads/briefing.wav"),
            "[FALLBACK] Transcribed audio from briefing.wav"
        );
        assert_eq!(
            placeholder_transcript(""),
            "[FALLBACK] Transcribed audio from audio.wav"
        );
    }

    #[tokio::test]
    async fn unreachable_daemon_yields_error_transcript() {
        let transcriber =
            Transcriber::Remote(WhisperClient::new(Client::new(), "http://127.0.0.1:1"));
        let text = transcriber.transcribe(vec![0u8; 16], "clip.wav").await;
        assert_eq!(text, TRANSCRIPTION_FAILED);
    }
}
