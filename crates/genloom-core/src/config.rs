//! Configuration types for the generation suite

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Backend endpoints and generation defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Base URL of the local text-generation daemon (Ollama API)
    #[serde(default = "default_ollama_url")]
    pub ollama_url: String,

    /// Model used by `/llm/generate` when the request names none
    #[serde(default = "default_llm_model")]
    pub default_llm_model: String,

    /// Base URL of a whisper.cpp-compatible transcription server
    #[serde(default)]
    pub whisper_url: Option<String>,

    /// Base URL of a Coqui-compatible TTS server
    #[serde(default)]
    pub tts_url: Option<String>,

    /// Base URL of an AUTOMATIC1111-compatible diffusion server
    #[serde(default)]
    pub diffusion_url: Option<String>,

    /// Timeout applied to every outbound backend request
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            ollama_url: default_ollama_url(),
            default_llm_model: default_llm_model(),
            whisper_url: None,
            tts_url: None,
            diffusion_url: None,
            http_timeout_secs: default_http_timeout_secs(),
        }
    }
}

impl SuiteConfig {
    /// Defaults overlaid with `GENLOOM_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Load a JSON config file, then apply environment overrides on top.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: SuiteConfig = serde_json::from_str(&raw).map_err(|e| {
            Error::ConfigError(format!("Invalid config file {}: {}", path.display(), e))
        })?;
        Ok(config.with_env_overrides())
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Some(url) = env_value("GENLOOM_OLLAMA_URL") {
            self.ollama_url = url;
        }
        if let Some(url) = env_value("GENLOOM_WHISPER_URL") {
            self.whisper_url = Some(url);
        }
        if let Some(url) = env_value("GENLOOM_TTS_URL") {
            self.tts_url = Some(url);
        }
        if let Some(url) = env_value("GENLOOM_DIFFUSION_URL") {
            self.diffusion_url = Some(url);
        }
        self
    }
}

fn env_value(key: &str) -> Option<String> {
    let raw = std::env::var(key).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_llm_model() -> String {
    "llama3.2".to_string()
}

fn default_http_timeout_secs() -> u64 {
    120
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Concurrent generation requests admitted before callers queue
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Upper bound on request bodies (audio uploads)
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_concurrent: default_max_concurrent(),
            request_timeout_secs: default_request_timeout_secs(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_concurrent() -> usize {
    100
}

fn default_request_timeout_secs() -> u64 {
    300
}

fn default_max_upload_bytes() -> usize {
    25 * 1024 * 1024
}
