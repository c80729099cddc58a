//! Text-to-speech backends.

use reqwest::Client;
use tracing::debug;

use crate::audio;
use crate::error::{Error, Result};

/// Client for a Coqui `tts-server` instance.
#[derive(Debug, Clone)]
pub struct CoquiClient {
    http: Client,
    base_url: String,
}

impl CoquiClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Returns the WAV payload produced by `/api/tts`.
    pub async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>> {
        let url = format!("{}/api/tts", self.base_url);
        debug!("Coqui request to {} (voice {})", url, voice);

        let response = self
            .http
            .get(&url)
            .query(&[("text", text), ("speaker_id", voice)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::InferenceError(format!(
                "TTS request failed: {}",
                status.as_u16()
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Text-to-speech backend selected by the registry.
#[derive(Debug, Clone)]
pub enum SpeechSynthesizer {
    Remote(CoquiClient),
    Placeholder,
}

impl SpeechSynthesizer {
    pub async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>> {
        match self {
            SpeechSynthesizer::Remote(client) => client.synthesize(text, voice).await,
            SpeechSynthesizer::Placeholder => {
                let text = text.to_string();
                tokio::task::spawn_blocking(move || audio::silent_speech_wav(&text))
                    .await
                    .map_err(|e| Error::InferenceError(format!("Audio encoding failed: {}", e)))?
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn placeholder_returns_wav() {
        let wav = SpeechSynthesizer::Placeholder
            .synthesize("Hello", "narrator")
            .await
            .unwrap();
        assert_eq!(&wav[..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
    }

    #[tokio::test]
    async fn remote_failure_is_an_error() {
        let synth =
            SpeechSynthesizer::Remote(CoquiClient::new(Client::new(), "http://127.0.0.1:1"));
        let err = synth.synthesize("Hello", "narrator").await.unwrap_err();
        assert!(matches!(err, Error::BackendError(_)), "unexpected error: {err}");
    }
}
