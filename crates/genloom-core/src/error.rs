//! Error types for the genloom core crate

use thiserror::Error;

/// Result alias used across the core crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Model load error: {0}")]
    ModelLoadError(String),

    #[error("Inference error: {0}")]
    InferenceError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Backend request failed: {0}")]
    BackendError(#[from] reqwest::Error),

    #[error("Audio encoding error: {0}")]
    AudioError(#[from] hound::Error),

    #[error("Image encoding error: {0}")]
    ImageError(#[from] png::EncodingError),

    #[error("Base64 decode error: {0}")]
    Base64Error(#[from] base64::DecodeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
