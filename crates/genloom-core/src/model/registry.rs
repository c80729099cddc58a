//! Model registry to ensure each slot is loaded once and shared across the app.

use reqwest::{Client, Url};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{OnceCell, RwLock};
use tracing::info;

use crate::backends::{
    BackendPlan, BackendRouter, CoquiClient, DiffusionClient, ExecutionBackend, ImageGenerator,
    SpeechSynthesizer, Transcriber, WhisperClient,
};
use crate::catalog::{ModelKind, TTS_VOICES};
use crate::error::{Error, Result};

/// Concrete backend behind a loaded slot.
#[derive(Debug, Clone)]
pub enum ModelHandle {
    /// Shapes come from the procedural mesh generator
    Procedural,
    Transcriber(Transcriber),
    Synthesizer(SpeechSynthesizer),
    ImageGenerator(ImageGenerator),
}

#[derive(Debug)]
pub struct LoadedModel {
    pub kind: ModelKind,
    pub plan: BackendPlan,
    pub handle: ModelHandle,
}

impl LoadedModel {
    pub fn transcriber(&self) -> Result<&Transcriber> {
        match &self.handle {
            ModelHandle::Transcriber(t) => Ok(t),
            _ => Err(self.wrong_handle("speech-to-text")),
        }
    }

    pub fn synthesizer(&self) -> Result<&SpeechSynthesizer> {
        match &self.handle {
            ModelHandle::Synthesizer(s) => Ok(s),
            _ => Err(self.wrong_handle("text-to-speech")),
        }
    }

    pub fn image_generator(&self) -> Result<&ImageGenerator> {
        match &self.handle {
            ModelHandle::ImageGenerator(g) => Ok(g),
            _ => Err(self.wrong_handle("text-to-image")),
        }
    }

    fn wrong_handle(&self, task: &str) -> Error {
        Error::InferenceError(format!("Model {} is not a {} model", self.kind, task))
    }
}

/// Listing entry for a model slot.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub name: &'static str,
    pub display_name: &'static str,
    pub loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<ExecutionBackend>,
    pub capabilities: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voices: Option<&'static [&'static str]>,
}

#[derive(Clone)]
pub struct ModelRegistry {
    router: BackendRouter,
    http: Client,
    slots: Arc<RwLock<HashMap<ModelKind, Arc<OnceCell<Arc<LoadedModel>>>>>>,
}

impl ModelRegistry {
    pub fn new(router: BackendRouter, http: Client) -> Self {
        Self {
            router,
            http,
            slots: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn is_loaded(&self, kind: ModelKind) -> bool {
        self.get(kind).await.is_some()
    }

    /// Load a slot, or return it if already loaded.
    ///
    /// Concurrent callers for the same kind wait on a single load.
    pub async fn load(&self, kind: ModelKind) -> Result<Arc<LoadedModel>> {
        let cell = {
            let mut guard = self.slots.write().await;
            guard
                .entry(kind)
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };

        let model = cell
            .get_or_try_init(|| async {
                let plan = self.router.select(kind);
                info!(
                    "Loading {} with {:?} backend ({})",
                    kind.display_name(),
                    plan.backend,
                    plan.reason
                );
                let model = self.instantiate(kind, plan)?;
                info!("{} loaded successfully", kind.display_name());
                Ok::<_, Error>(Arc::new(model))
            })
            .await?;

        Ok(model.clone())
    }

    pub async fn get(&self, kind: ModelKind) -> Option<Arc<LoadedModel>> {
        let guard = self.slots.read().await;
        guard.get(&kind).and_then(|cell| cell.get().cloned())
    }

    pub async fn unload(&self, kind: ModelKind) {
        let mut guard = self.slots.write().await;
        if guard.remove(&kind).is_some() {
            info!("{} unloaded", kind.display_name());
        }
    }

    pub async fn loaded_count(&self) -> usize {
        let guard = self.slots.read().await;
        guard.values().filter(|cell| cell.initialized()).count()
    }

    pub async fn list(&self) -> Vec<ModelInfo> {
        let guard = self.slots.read().await;
        ModelKind::all()
            .iter()
            .map(|kind| {
                let loaded = guard.get(kind).and_then(|cell| cell.get());
                ModelInfo {
                    name: kind.name(),
                    display_name: kind.display_name(),
                    loaded: loaded.is_some(),
                    backend: loaded.map(|m| m.plan.backend),
                    capabilities: kind.capabilities(),
                    voices: (*kind == ModelKind::Tts).then_some(TTS_VOICES),
                }
            })
            .collect()
    }

    fn instantiate(&self, kind: ModelKind, plan: BackendPlan) -> Result<LoadedModel> {
        let handle = match (plan.backend, plan.endpoint.as_deref()) {
            (ExecutionBackend::Remote, Some(endpoint)) => {
                let endpoint = validate_endpoint(kind, endpoint)?;
                let http = self.http.clone();
                match kind {
                    ModelKind::Whisper => ModelHandle::Transcriber(Transcriber::Remote(
                        WhisperClient::new(http, endpoint),
                    )),
                    ModelKind::Tts => ModelHandle::Synthesizer(SpeechSynthesizer::Remote(
                        CoquiClient::new(http, endpoint),
                    )),
                    ModelKind::StableDiffusion => ModelHandle::ImageGenerator(
                        ImageGenerator::Remote(DiffusionClient::new(http, endpoint)),
                    ),
                    ModelKind::PointE | ModelKind::ShapE => ModelHandle::Procedural,
                }
            }
            (ExecutionBackend::Remote, None) => {
                return Err(Error::ModelLoadError(format!(
                    "{} selected a remote backend without an endpoint",
                    kind.display_name()
                )));
            }
            (ExecutionBackend::Placeholder, _) => match kind {
                ModelKind::PointE | ModelKind::ShapE => ModelHandle::Procedural,
                ModelKind::Whisper => ModelHandle::Transcriber(Transcriber::Placeholder),
                ModelKind::Tts => ModelHandle::Synthesizer(SpeechSynthesizer::Placeholder),
                ModelKind::StableDiffusion => {
                    ModelHandle::ImageGenerator(ImageGenerator::Placeholder)
                }
            },
        };

        Ok(LoadedModel { kind, plan, handle })
    }
}

fn validate_endpoint(kind: ModelKind, endpoint: &str) -> Result<String> {
    let url = Url::parse(endpoint).map_err(|e| {
        Error::ModelLoadError(format!(
            "Invalid {} endpoint '{}': {}",
            kind.display_name(),
            endpoint,
            e
        ))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::ModelLoadError(format!(
            "Unsupported scheme for {} endpoint: {}",
            kind.display_name(),
            url.scheme()
        )));
    }

    Ok(endpoint.trim_end_matches('/').to_string())
}
