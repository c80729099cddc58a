//! API routes and handlers

mod diffusion;
mod info;
mod llm;
mod models;
mod payload;
mod router;
mod shape;
mod tts;
mod whisper;

pub use router::create_router;
