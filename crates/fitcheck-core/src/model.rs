//! Remote style model trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::aesthetic::Aesthetic;
use crate::scoring::clamp_score;
use crate::Result;

/// Most suggestions kept from a model answer
pub const MAX_MODEL_SUGGESTIONS: usize = 4;

/// Configuration for a model request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout: Duration,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_id: "gpt-4o-mini".to_string(),
            max_tokens: 800,
            temperature: 0.3,
            timeout: Duration::from_secs(60),
        }
    }
}

impl ModelConfig {
    /// Settings for before/after evaluation: shorter and less creative
    pub fn for_evaluation(&self) -> Self {
        Self {
            max_tokens: 600,
            temperature: 0.2,
            ..self.clone()
        }
    }
}

/// Per-area scores reported by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementAreas {
    pub fit: u8,
    pub color: u8,
    pub accessories: u8,
    pub layering: u8,
}

/// Structured answer from a style model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelAnalysis {
    pub overall_score: u8,
    pub feedback: String,
    pub suggestions: Vec<String>,
    pub improvement_areas: ImprovementAreas,
}

impl ModelAnalysis {
    /// Clamp scores into `1..=10`, drop blank suggestions and keep at most four
    pub fn sanitized(mut self, aesthetic: Aesthetic) -> Self {
        self.overall_score = clamp_score(i32::from(self.overall_score));
        self.improvement_areas = ImprovementAreas {
            fit: clamp_score(i32::from(self.improvement_areas.fit)),
            color: clamp_score(i32::from(self.improvement_areas.color)),
            accessories: clamp_score(i32::from(self.improvement_areas.accessories)),
            layering: clamp_score(i32::from(self.improvement_areas.layering)),
        };

        self.feedback = self.feedback.trim().to_string();
        if self.feedback.is_empty() {
            self.feedback = format!(
                "Good {} foundation with room for improvement.",
                aesthetic.display_name()
            );
        }

        self.suggestions = self
            .suggestions
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .take(MAX_MODEL_SUGGESTIONS)
            .collect();

        self
    }
}

/// A before/after pair to be judged against earlier suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementRequest {
    pub before_image: String,
    pub after_image: String,
    pub original_suggestions: Vec<String>,
    pub aesthetic: Aesthetic,
}

/// Trait for remote style models (e.g. OpenAI chat completions)
///
/// Implementations return structured analyses. Callers are expected to fall
/// back to the deterministic scorer when a call fails.
#[async_trait]
pub trait StyleModel: Send + Sync {
    /// Rate a single outfit
    async fn analyze(&self, image_ref: &str, aesthetic: Aesthetic) -> Result<ModelAnalysis>;

    /// Judge how well an "after" outfit applied earlier suggestions
    async fn evaluate_improvement(&self, request: &ImprovementRequest) -> Result<ModelAnalysis>;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(overall: u8, suggestions: &[&str]) -> ModelAnalysis {
        ModelAnalysis {
            overall_score: overall,
            feedback: "  Sharp tailoring.  ".to_string(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            improvement_areas: ImprovementAreas {
                fit: 0,
                color: 12,
                accessories: 5,
                layering: 10,
            },
        }
    }

    #[test]
    fn test_sanitize_clamps_scores() {
        let analysis = raw(0, &[]).sanitized(Aesthetic::OldMoney);
        assert_eq!(analysis.overall_score, 1);
        assert_eq!(
            analysis.improvement_areas,
            ImprovementAreas {
                fit: 1,
                color: 10,
                accessories: 5,
                layering: 10,
            }
        );
        assert_eq!(analysis.feedback, "Sharp tailoring.");
    }

    #[test]
    fn test_sanitize_limits_suggestions() {
        let analysis = raw(7, &["a", " ", "b", "c", "d", "e"]).sanitized(Aesthetic::Y2k);
        assert_eq!(analysis.suggestions, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_sanitize_fills_empty_feedback() {
        let mut analysis = raw(6, &["a"]);
        analysis.feedback = String::new();
        let analysis = analysis.sanitized(Aesthetic::Coquette);
        assert_eq!(analysis.feedback, "Good Coquette foundation with room for improvement.");
    }

    #[test]
    fn test_evaluation_config() {
        let config = ModelConfig::default().for_evaluation();
        assert_eq!(config.model_id, "gpt-4o-mini");
        assert_eq!(config.max_tokens, 600);
        assert_eq!(config.temperature, 0.2);
    }
}
