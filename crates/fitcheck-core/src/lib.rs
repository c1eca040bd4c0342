//! Core types and the deterministic style scorer for Fit Check
//!
//! An outfit is rated from an opaque image reference and an aesthetic. The
//! reference is hashed into pseudo visual features, the features are scored
//! with per-aesthetic rules, and the scores drive feedback text and ranked
//! improvements. Everything here is pure and synchronous except the
//! [`StyleModel`] trait, which remote model crates implement.

pub mod aesthetic;
pub mod analyzer;
pub mod comparison;
pub mod error;
pub mod features;
pub mod feedback;
pub mod model;
pub mod scoring;
pub mod stylist;


pub use aesthetic::Aesthetic;
pub use analyzer::{StyleAnalysis, StyleScorer, score};
pub use comparison::StyleComparison;
pub use error::{Error, Result};
pub use features::{FitCategory, VisualFeatures, image_hash};
pub use feedback::{Impact, Improvement, ImprovementCategory};
pub use model::{ImprovementAreas, ImprovementRequest, ModelAnalysis, ModelConfig, StyleModel};
pub use scoring::{ScoreBand, ScoreSet};
pub use stylist::{Stylist, StylistContext, StylistIntent, StylistReply};
