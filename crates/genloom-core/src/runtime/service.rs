//! Runtime service orchestrator.

use reqwest::Client;
use std::time::Duration;

use crate::backends::{BackendRouter, OllamaClient};
use crate::config::SuiteConfig;
use crate::error::Result;
use crate::model::{ModelInfo, ModelRegistry};

/// Owns the model registry and the shared HTTP client.
pub struct GenerationService {
    pub(crate) config: SuiteConfig,
    pub(crate) registry: ModelRegistry,
    pub(crate) ollama: OllamaClient,
}

impl GenerationService {
    pub fn new(config: SuiteConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;
        let registry = ModelRegistry::new(BackendRouter::from_config(&config), http.clone());
        let ollama = OllamaClient::new(http, config.ollama_url.clone());
        Ok(Self {
            config,
            registry,
            ollama,
        })
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub async fn models_loaded(&self) -> usize {
        self.registry.loaded_count().await
    }

    pub async fn list_models(&self) -> Vec<ModelInfo> {
        self.registry.list().await
    }
}
