//! Outfit rater: remote model first, deterministic scorer as fallback

use serde::{Deserialize, Serialize};

use fitcheck_core::{
    Aesthetic, ImprovementRequest, ModelAnalysis, StyleAnalysis, StyleComparison, StyleModel,
    StyleScorer,
};

/// Where a rating came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingSource {
    Model,
    Heuristic,
}

/// A rating from either the remote model or the deterministic scorer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "analysis", rename_all = "lowercase")]
pub enum Rating {
    Model(ModelAnalysis),
    Heuristic(StyleAnalysis),
}

impl Rating {
    pub fn source(&self) -> RatingSource {
        match self {
            Rating::Model(_) => RatingSource::Model,
            Rating::Heuristic(_) => RatingSource::Heuristic,
        }
    }

    pub fn overall_score(&self) -> u8 {
        match self {
            Rating::Model(analysis) => analysis.overall_score,
            Rating::Heuristic(analysis) => analysis.overall_score,
        }
    }

    pub fn feedback(&self) -> &str {
        match self {
            Rating::Model(analysis) => &analysis.feedback,
            Rating::Heuristic(analysis) => &analysis.feedback,
        }
    }

    pub fn suggestions(&self) -> &[String] {
        match self {
            Rating::Model(analysis) => &analysis.suggestions,
            Rating::Heuristic(analysis) => &analysis.suggestions,
        }
    }
}

/// Result of judging a before/after pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementReport {
    pub source: RatingSource,
    pub comparison: StyleComparison,
    pub feedback: String,
    pub suggestions: Vec<String>,
}

/// Rates outfits with an optional remote model.
///
/// Rating never fails: any model error is logged and the deterministic scorer
/// answers instead.
pub struct OutfitRater<M: StyleModel> {
    model: Option<M>,
    scorer: StyleScorer,
}

impl<M: StyleModel> OutfitRater<M> {
    /// Create a rater that only uses the deterministic scorer
    pub fn heuristic() -> Self {
        Self {
            model: None,
            scorer: StyleScorer::new(),
        }
    }

    /// Create a rater that asks the model first
    pub fn with_model(model: M) -> Self {
        Self {
            model: Some(model),
            scorer: StyleScorer::new(),
        }
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    pub fn scorer(&self) -> &StyleScorer {
        &self.scorer
    }

    /// Rate one outfit
    pub async fn rate(&self, image_ref: &str, aesthetic: Aesthetic) -> Rating {
        if let Some(model) = &self.model {
            match model.analyze(image_ref, aesthetic).await {
                Ok(analysis) => return Rating::Model(analysis),
                Err(e) => {
                    tracing::warn!(
                        model = model.model_id(),
                        error = %e,
                        "style model failed, using deterministic scorer"
                    );
                }
            }
        }

        Rating::Heuristic(self.scorer.analyze(image_ref, aesthetic))
    }

    /// Judge a before/after pair against the suggestions given for the "before" look
    pub async fn evaluate_improvement(
        &self,
        before_image: &str,
        after_image: &str,
        original_suggestions: &[String],
        aesthetic: Aesthetic,
    ) -> ImprovementReport {
        if let Some(model) = &self.model {
            let request = ImprovementRequest {
                before_image: before_image.to_string(),
                after_image: after_image.to_string(),
                original_suggestions: original_suggestions.to_vec(),
                aesthetic,
            };

            // the model judges only the "after" look, so the baseline still needs a score
            let before = self.rate(before_image, aesthetic).await;

            match model.evaluate_improvement(&request).await {
                Ok(after) => {
                    return ImprovementReport {
                        source: RatingSource::Model,
                        comparison: StyleComparison::between(before.overall_score(), after.overall_score),
                        feedback: after.feedback,
                        suggestions: after.suggestions,
                    };
                }
                Err(e) => {
                    tracing::warn!(
                        model = model.model_id(),
                        error = %e,
                        "improvement evaluation failed, using deterministic scorer"
                    );
                }
            }
        }

        let before = self.scorer.analyze(before_image, aesthetic);
        let after = self.scorer.analyze(after_image, aesthetic);

        ImprovementReport {
            source: RatingSource::Heuristic,
            comparison: StyleComparison::of(&before, &after),
            feedback: after.feedback,
            suggestions: after.suggestions,
        }
    }
}
