//! Backend routing primitives.
//!
//! Each model slot is served either by a remote daemon reached over HTTP or
//! by a deterministic placeholder. The choice is made once, when the registry
//! loads the slot, instead of at every call site.

mod coqui;
mod diffusion;
mod ollama;
mod whisper;

use serde::Serialize;

pub use coqui::{CoquiClient, SpeechSynthesizer};
pub use diffusion::{DiffusionClient, ImageGenerator, ImageRequest};
pub use ollama::OllamaClient;
pub use whisper::{Transcriber, WhisperClient};

use crate::catalog::ModelKind;
use crate::config::SuiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionBackend {
    Remote,
    Placeholder,
}

#[derive(Debug, Clone)]
pub struct BackendPlan {
    pub backend: ExecutionBackend,
    pub endpoint: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct BackendRouter {
    whisper_url: Option<String>,
    tts_url: Option<String>,
    diffusion_url: Option<String>,
}

impl BackendRouter {
    pub fn from_config(config: &SuiteConfig) -> Self {
        Self {
            whisper_url: config.whisper_url.clone(),
            tts_url: config.tts_url.clone(),
            diffusion_url: config.diffusion_url.clone(),
        }
    }

    fn endpoint_for(&self, kind: ModelKind) -> Option<&str> {
        match kind {
            ModelKind::Whisper => self.whisper_url.as_deref(),
            ModelKind::Tts => self.tts_url.as_deref(),
            ModelKind::StableDiffusion => self.diffusion_url.as_deref(),
            ModelKind::PointE | ModelKind::ShapE => None,
        }
    }

    pub fn select(&self, kind: ModelKind) -> BackendPlan {
        if kind.is_procedural() {
            return BackendPlan {
                backend: ExecutionBackend::Placeholder,
                endpoint: None,
                reason: format!("{} is served by the procedural mesh generator", kind),
            };
        }

        match self.endpoint_for(kind) {
            Some(url) => BackendPlan {
                backend: ExecutionBackend::Remote,
                endpoint: Some(url.trim_end_matches('/').to_string()),
                reason: format!("{} endpoint configured at {}", kind.display_name(), url),
            },
            None => BackendPlan {
                backend: ExecutionBackend::Placeholder,
                endpoint: None,
                reason: format!(
                    "no {} endpoint configured; using placeholder output",
                    kind.display_name()
                ),
            },
        }
    }
}
