//! Model kind catalog and identifier parsing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Voices advertised by the speech backend.
pub const TTS_VOICES: &[&str] = &["agent_bond", "narrator", "character_npc"];

/// Voice used when a request names none.
pub const DEFAULT_VOICE: &str = "agent_bond";

/// Generative model slots managed by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    PointE,
    ShapE,
    Whisper,
    Tts,
    StableDiffusion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTask {
    TextTo3d,
    SpeechToText,
    TextToSpeech,
    TextToImage,
}

#[derive(Debug, Clone)]
pub struct ParseModelKindError {
    input: String,
}

impl ParseModelKindError {
    fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

impl fmt::Display for ParseModelKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unsupported model identifier: {}",
            self.input.trim().if_empty("<empty>")
        )
    }
}

impl std::error::Error for ParseModelKindError {}

trait EmptyFallback {
    fn if_empty(self, fallback: &str) -> String;
}

impl EmptyFallback for &str {
    fn if_empty(self, fallback: &str) -> String {
        if self.trim().is_empty() {
            fallback.to_string()
        } else {
            self.to_string()
        }
    }
}

impl ModelKind {
    pub fn all() -> &'static [ModelKind] {
        &[
            ModelKind::PointE,
            ModelKind::ShapE,
            ModelKind::Whisper,
            ModelKind::Tts,
            ModelKind::StableDiffusion,
        ]
    }

    /// Registry key, also the serde name.
    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::PointE => "point_e",
            ModelKind::ShapE => "shap_e",
            ModelKind::Whisper => "whisper",
            ModelKind::Tts => "tts",
            ModelKind::StableDiffusion => "stable_diffusion",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModelKind::PointE => "Point-E",
            ModelKind::ShapE => "Shap-E",
            ModelKind::Whisper => "Whisper",
            ModelKind::Tts => "Coqui TTS",
            ModelKind::StableDiffusion => "Stable Diffusion",
        }
    }

    pub fn task(&self) -> ModelTask {
        match self {
            ModelKind::PointE | ModelKind::ShapE => ModelTask::TextTo3d,
            ModelKind::Whisper => ModelTask::SpeechToText,
            ModelKind::Tts => ModelTask::TextToSpeech,
            ModelKind::StableDiffusion => ModelTask::TextToImage,
        }
    }

    pub fn capabilities(&self) -> &'static [&'static str] {
        match self {
            ModelKind::PointE => &["text_to_pointcloud", "pointcloud_to_mesh"],
            ModelKind::ShapE => &["text_to_mesh", "image_to_mesh"],
            ModelKind::Whisper => &["speech_to_text"],
            ModelKind::Tts => &["text_to_speech"],
            ModelKind::StableDiffusion => &["text_to_image"],
        }
    }

    /// Shapes are always produced procedurally.
    pub fn is_procedural(&self) -> bool {
        self.task() == ModelTask::TextTo3d
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ModelKind {
    type Err = ParseModelKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_model_kind(s)
    }
}

/// Parse a registry name, display name, or a spelling of either that only
/// differs in case or punctuation (`shap-e`, `Stable Diffusion`, `TTS`).
pub fn parse_model_kind(input: &str) -> Result<ModelKind, ParseModelKindError> {
    let normalized = normalize_identifier(input);
    if normalized.is_empty() {
        return Err(ParseModelKindError::new(input));
    }

    ModelKind::all()
        .iter()
        .copied()
        .find(|kind| {
            normalize_identifier(kind.name()) == normalized
                || normalize_identifier(kind.display_name()) == normalized
        })
        .ok_or_else(|| ParseModelKindError::new(input))
}

fn normalize_identifier(input: &str) -> String {
    input
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}
