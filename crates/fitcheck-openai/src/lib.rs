//! OpenAI integration for Fit Check
//!
//! This crate provides the OpenAI implementation of the StyleModel trait. The
//! model is asked for a JSON-schema constrained answer, so no prose parsing is
//! needed.

mod client;
mod config;


pub use client::OpenAiClient;
pub use config::{DEFAULT_API_URL, DEFAULT_MODEL, OpenAiConfig};

// Re-export core types for convenience
pub use fitcheck_core::{Error, ModelAnalysis, ModelConfig, Result, StyleModel};
