//! Genloom Core - generation backends behind one service
//!
//! The crate wraps external generative daemons (an Ollama text server,
//! whisper, Coqui TTS, a diffusion server) behind [`GenerationService`].
//! Any slot without a configured daemon is served by a deterministic
//! placeholder: silent speech, a solid-color image, or a procedural mesh
//! from [`mesh`].
//!
//! # Example
//!
//! ```ignore
//! use genloom_core::{GenerationService, SuiteConfig};
//!
//! let service = GenerationService::new(SuiteConfig::from_env())?;
//! let shape = service.generate_shape("a glowing sphere", None, None).await?;
//! assert_eq!(shape.mesh.vertex_count(), 24);
//! ```

pub mod audio;
pub mod backends;
pub mod catalog;
pub mod config;
pub mod error;
pub mod mesh;
pub mod model;
pub mod raster;
pub mod runtime;

#[cfg(test)]
mod test_support;

pub use backends::{BackendPlan, BackendRouter, ExecutionBackend, ImageRequest};
pub use catalog::{parse_model_kind, ModelKind, ParseModelKindError, DEFAULT_VOICE, TTS_VOICES};
pub use config::{ServerConfig, SuiteConfig};
pub use error::{Error, Result};
pub use mesh::{Archetype, Mesh};
pub use model::{LoadedModel, ModelHandle, ModelInfo, ModelRegistry};
pub use runtime::{
    GenerationService, PointCloudGeneration, ShapeGeneration, TextGeneration, Transcription,
};
