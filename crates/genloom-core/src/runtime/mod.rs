//! Runtime orchestration layer.
//!
//! `GenerationService` is the single entry point the HTTP layer talks to.
//! Each task lives in its own module as an `impl GenerationService` block.

mod asr;
mod image;
mod llm;
mod service;
mod shape;
mod tts;
mod types;

pub use service::GenerationService;
pub use types::{PointCloudGeneration, ShapeGeneration, TextGeneration, Transcription};
