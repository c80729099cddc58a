//! Runtime result types.

use crate::mesh::{Archetype, Mesh};

#[derive(Debug, Clone)]
pub struct TextGeneration {
    pub response: String,
    pub model: String,
    /// Whitespace-separated words in `response`
    pub tokens: usize,
}

#[derive(Debug, Clone)]
pub struct PointCloudGeneration {
    pub mesh: Mesh,
    pub point_count: usize,
}

#[derive(Debug, Clone)]
pub struct ShapeGeneration {
    pub archetype: Archetype,
    pub mesh: Mesh,
}

#[derive(Debug, Clone)]
pub struct Transcription {
    pub transcript: String,
    /// Fixed; whisper reports no confidence score
    pub confidence: f32,
    pub language: String,
}
