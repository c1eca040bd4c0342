//! Deterministic style scorer

use serde::{Deserialize, Serialize};

use crate::aesthetic::Aesthetic;
use crate::features::VisualFeatures;
use crate::feedback::{Improvement, generate_feedback, generate_improvements};
use crate::scoring::ScoreSet;

/// Full result of rating one outfit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleAnalysis {
    pub overall_score: u8,
    pub fit_score: u8,
    pub color_score: u8,
    pub accessory_score: u8,
    pub trend_score: u8,
    pub feedback: String,
    /// The `suggestion` text of each improvement, in order
    pub suggestions: Vec<String>,
    pub improvements: Vec<Improvement>,
}

impl StyleAnalysis {
    pub fn scores(&self) -> ScoreSet {
        ScoreSet {
            overall: self.overall_score,
            fit: self.fit_score,
            color: self.color_score,
            accessory: self.accessory_score,
            trend: self.trend_score,
        }
    }
}

/// Rates outfits from their image reference alone.
///
/// Holds no state; every call is independent and repeatable.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleScorer;

impl StyleScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn extract_features(&self, image_ref: &str) -> VisualFeatures {
        VisualFeatures::extract(image_ref)
    }

    /// Score an outfit against an aesthetic
    pub fn analyze(&self, image_ref: &str, aesthetic: Aesthetic) -> StyleAnalysis {
        let features = self.extract_features(image_ref);
        self.analyze_features(&features, aesthetic)
    }

    /// Score already extracted features
    pub fn analyze_features(&self, features: &VisualFeatures, aesthetic: Aesthetic) -> StyleAnalysis {
        let scores = ScoreSet::compute(features, aesthetic);
        let feedback = generate_feedback(&scores, aesthetic, features);
        let improvements = generate_improvements(&scores, aesthetic);

        StyleAnalysis {
            overall_score: scores.overall,
            fit_score: scores.fit,
            color_score: scores.color,
            accessory_score: scores.accessory,
            trend_score: scores.trend,
            feedback,
            suggestions: improvements.iter().map(|imp| imp.suggestion.clone()).collect(),
            improvements,
        }
    }
}

/// Score an image reference against an aesthetic label.
///
/// Unknown labels are scored as y2k.
pub fn score(image_ref: &str, aesthetic: &str) -> StyleAnalysis {
    StyleScorer.analyze(image_ref, Aesthetic::from_label(aesthetic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::ImprovementCategory;

    const SAMPLE_REFS: [&str; 8] = [
        "",
        "x",
        "abc123.png",
        "photo.jpg",
        "outfit.png",
        "café 👗.png",
        "data:image/png;base64,iVBORw0KGgo",
        "https://cdn.example.com/uploads/2024/outfit-of-the-day.jpeg",
    ];

    fn categories(analysis: &StyleAnalysis) -> Vec<ImprovementCategory> {
        analysis.improvements.iter().map(|i| i.category).collect()
    }

    #[test]
    fn test_empty_reference_scores() {
        let analysis = score("", "minimalist");
        assert!((1..=10).contains(&analysis.overall_score));
        assert_eq!(analysis.overall_score, 7);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        for image in SAMPLE_REFS {
            for aesthetic in Aesthetic::all() {
                let first = score(image, aesthetic.as_str());
                let second = score(image, aesthetic.as_str());
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_scores_stay_in_range() {
        for i in 0..2_000 {
            let image = format!("upload-{}.jpg", i);
            for aesthetic in Aesthetic::all() {
                let scores = StyleScorer.analyze(&image, aesthetic).scores();
                for value in [scores.overall, scores.fit, scores.color, scores.accessory, scores.trend] {
                    assert!((1..=10).contains(&value), "{} out of range for {}", value, image);
                }
            }
        }
    }

    #[test]
    fn test_unknown_aesthetic_matches_y2k() {
        for image in SAMPLE_REFS {
            assert_eq!(score(image, "banana"), score(image, "y2k"));
            assert_eq!(score(image, "unknown-aesthetic"), score(image, "y2k"));
        }
    }

    #[test]
    fn test_improvement_count_and_style_tail() {
        let mut strong_outfits = 0;
        for i in 0..2_000 {
            let image = format!("closet/{}.png", i);
            for aesthetic in Aesthetic::all() {
                let analysis = StyleScorer.analyze(&image, aesthetic);
                let count = analysis.improvements.len();
                assert!((1..=3).contains(&count));
                if count < 3 {
                    assert_eq!(analysis.improvements[count - 1].category, ImprovementCategory::Style);
                }
                if analysis.fit_score >= 7 && analysis.color_score >= 7 && analysis.accessory_score >= 7 {
                    strong_outfits += 1;
                    assert_eq!(categories(&analysis), vec![ImprovementCategory::Style], "{}", image);
                }
                assert_eq!(analysis.suggestions.len(), count);
                for (suggestion, improvement) in analysis.suggestions.iter().zip(&analysis.improvements) {
                    assert_eq!(suggestion, &improvement.suggestion);
                }
            }
        }
        assert!(strong_outfits > 0);
    }

    #[test]
    fn test_well_rated_outfit_only_gets_style_advice() {
        let analysis = score("abc123.png", "y2k");
        assert!(analysis.fit_score >= 7 && analysis.color_score >= 7 && analysis.accessory_score >= 7);
        assert_eq!(categories(&analysis), vec![ImprovementCategory::Style]);
    }

    #[test]
    fn test_weak_outfit_drops_style_advice() {
        let analysis = score("look-10.jpg", "y2k");
        assert_eq!(
            categories(&analysis),
            vec![
                ImprovementCategory::Color,
                ImprovementCategory::Accessory,
                ImprovementCategory::Fit,
            ]
        );
    }

    #[test]
    fn test_aesthetics_change_the_rating() {
        let old_money = score("photo.jpg", "old-money");
        let streetwear = score("photo.jpg", "streetwear");
        assert_eq!(old_money.trend_score, 7);
        assert_eq!(streetwear.trend_score, 8);
        assert_ne!(old_money, streetwear);
    }

    #[test]
    fn test_same_band_shares_template() {
        let a = score("look-5.jpg", "streetwear");
        let b = score("look-20.jpg", "y2k");
        assert_eq!(a.overall_score, 9);
        assert_eq!(b.overall_score, 9);
        assert!(a.feedback.contains("You've mastered the"));
        assert!(b.feedback.contains("You've mastered the"));
    }

    #[test]
    fn test_analysis_snapshot() {
        let analysis = score("outfit.png", "old-money");
        insta::assert_json_snapshot!(analysis, @r#"
        {
          "overallScore": 6,
          "fitScore": 6,
          "colorScore": 5,
          "accessoryScore": 8,
          "trendScore": 5,
          "feedback": "You understand the Old money aesthetic basics. Your current gray combination has potential, but there's room for improvement in execution and styling details.",
          "suggestions": [
            "Replace bright colors with neutral tones like cream, navy, or camel for timeless elegance",
            "Opt for well-tailored pieces - a structured blazer or perfectly fitted trousers",
            "Layer a cashmere sweater under a blazer for sophisticated texture"
          ],
          "improvements": [
            {
              "category": "color",
              "suggestion": "Replace bright colors with neutral tones like cream, navy, or camel for timeless elegance",
              "impact": "high",
              "reason": "Better color harmony will instantly elevate your look"
            },
            {
              "category": "fit",
              "suggestion": "Opt for well-tailored pieces - a structured blazer or perfectly fitted trousers",
              "impact": "high",
              "reason": "Proper fit is the foundation of any great look"
            },
            {
              "category": "style",
              "suggestion": "Layer a cashmere sweater under a blazer for sophisticated texture",
              "impact": "medium",
              "reason": "This will enhance your old-money aesthetic"
            }
          ]
        }
        "#);
    }
}
