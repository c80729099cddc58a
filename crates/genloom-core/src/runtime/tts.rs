//! Text-to-speech runtime methods.

use tracing::info;

use crate::audio::MAX_SPEECH_CHARS;
use crate::catalog::{ModelKind, DEFAULT_VOICE};
use crate::error::{Error, Result};
use crate::runtime::service::GenerationService;

impl GenerationService {
    /// Synthesize `text` to WAV bytes.
    pub async fn synthesize(&self, text: &str, voice: Option<&str>) -> Result<Vec<u8>> {
        if text.is_empty() {
            return Err(Error::InvalidInput("Text required".to_string()));
        }
        if text.chars().count() > MAX_SPEECH_CHARS {
            return Err(Error::InvalidInput(format!(
                "Text too long: at most {} characters",
                MAX_SPEECH_CHARS
            )));
        }
        let voice = voice.filter(|v| !v.trim().is_empty()).unwrap_or(DEFAULT_VOICE);

        let model = self.registry.load(ModelKind::Tts).await?;
        let preview: String = text.chars().take(50).collect();
        info!("Synthesizing ({}): {}...", voice, preview);

        model.synthesizer()?.synthesize(text, voice).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio;
    use crate::test_support::offline_service;

    #[tokio::test]
    async fn placeholder_speech_length() {
        let service = offline_service();
        let wav = service.synthesize("Hello", None).await.unwrap();
        let reader = hound::WavReader::new(std::io::Cursor::new(wav)).unwrap();
        assert_eq!(reader.spec().sample_rate, audio::SAMPLE_RATE);
        assert_eq!(reader.len(), 11025);
    }

    #[tokio::test]
    async fn oversized_text_is_rejected_before_loading() {
        let service = offline_service();
        let text = "x".repeat(MAX_SPEECH_CHARS + 1);
        let err = service.synthesize(&text, None).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(service.models_loaded().await, 0);

        let at_limit = "x".repeat(MAX_SPEECH_CHARS);
        assert!(service.synthesize(&at_limit, None).await.is_ok());
    }

    #[tokio::test]
    async fn empty_text_is_rejected() {
        let service = offline_service();
        let err = service.synthesize("", Some("narrator")).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Text required");
    }
}
