//! Model slot lifecycle.

mod registry;

pub use registry::{LoadedModel, ModelHandle, ModelInfo, ModelRegistry};
