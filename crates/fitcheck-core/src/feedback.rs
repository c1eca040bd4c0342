//! Feedback text and ranked improvement suggestions

use serde::{Deserialize, Serialize};

use crate::aesthetic::Aesthetic;
use crate::features::VisualFeatures;
use crate::scoring::{ScoreBand, ScoreSet};

/// At most this many improvements are returned per analysis
pub const MAX_IMPROVEMENTS: usize = 3;

/// Sub-scores below this trigger an improvement for their category
const IMPROVEMENT_THRESHOLD: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImprovementCategory {
    Color,
    Accessory,
    Fit,
    Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// A single suggestion with its expected impact and rationale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Improvement {
    pub category: ImprovementCategory,
    pub suggestion: String,
    pub impact: Impact,
    pub reason: String,
}

/// Pick the feedback paragraph for the score band, filled in with the features
pub fn generate_feedback(scores: &ScoreSet, aesthetic: Aesthetic, features: &VisualFeatures) -> String {
    let name = aesthetic.display_name();
    let colors = features.dominant_colors.join(" and ");

    match scores.band() {
        ScoreBand::Mastered => format!(
            "Absolutely stunning! You've mastered the {} aesthetic perfectly. Your outfit coordination, \
             color harmony ({:.1}/1.0), and styling choices are impeccable.",
            name, features.color_harmony
        ),
        ScoreBand::GreatFoundation => format!(
            "Great {} foundation! Your {} fit works well with your {} color palette. \
             A few small adjustments could make this look even more polished.",
            name, features.fit, colors
        ),
        ScoreBand::Basics => format!(
            "You understand the {} aesthetic basics. Your current {} combination has potential, \
             but there's room for improvement in execution and styling details.",
            name, colors
        ),
        ScoreBand::NeedsWork => format!(
            "This look needs work to capture the true {} essence. Consider revisiting the key elements: \
             fit (currently {}), color coordination, and accessory balance.",
            name, features.fit
        ),
    }
}

/// Build improvements in priority order (color, accessory, fit, style) and keep the first three.
///
/// The style suggestion is always a candidate, so the result is never empty.
pub fn generate_improvements(scores: &ScoreSet, aesthetic: Aesthetic) -> Vec<Improvement> {
    let mut improvements = Vec::with_capacity(4);

    if scores.color < IMPROVEMENT_THRESHOLD {
        improvements.push(Improvement {
            category: ImprovementCategory::Color,
            suggestion: color_suggestion(aesthetic).to_string(),
            impact: Impact::High,
            reason: "Better color harmony will instantly elevate your look".to_string(),
        });
    }

    if scores.accessory < IMPROVEMENT_THRESHOLD {
        improvements.push(Improvement {
            category: ImprovementCategory::Accessory,
            suggestion: accessory_suggestion(aesthetic).to_string(),
            impact: Impact::Medium,
            reason: "The right accessories can transform your entire outfit".to_string(),
        });
    }

    if scores.fit < IMPROVEMENT_THRESHOLD {
        improvements.push(Improvement {
            category: ImprovementCategory::Fit,
            suggestion: fit_suggestion(aesthetic).to_string(),
            impact: Impact::High,
            reason: "Proper fit is the foundation of any great look".to_string(),
        });
    }

    improvements.push(Improvement {
        category: ImprovementCategory::Style,
        suggestion: style_suggestion(aesthetic).to_string(),
        impact: Impact::Medium,
        reason: format!("This will enhance your {} aesthetic", aesthetic),
    });

    improvements.truncate(MAX_IMPROVEMENTS);
    improvements
}

fn color_suggestion(aesthetic: Aesthetic) -> &'static str {
    match aesthetic {
        Aesthetic::Y2k => "Try adding metallic silver accents or holographic details to enhance the futuristic vibe",
        Aesthetic::OldMoney => "Replace bright colors with neutral tones like cream, navy, or camel for timeless elegance",
        Aesthetic::Streetwear => "Add a pop of neon color or stick to urban neutrals like black, white, and grey",
        Aesthetic::Minimalist => "Simplify to a monochromatic palette - try all black or varying shades of one color",
        Aesthetic::Maximalist => "Mix bold, contrasting colors - try pairing bright pink with emerald green",
        Aesthetic::Coquette => "Incorporate soft pastels like blush pink, lavender, or cream for romantic femininity",
    }
}

fn accessory_suggestion(aesthetic: Aesthetic) -> &'static str {
    match aesthetic {
        Aesthetic::Y2k => "Add chrome jewelry, platform boots, or a holographic bag for authentic Y2K vibes",
        Aesthetic::OldMoney => "Try a classic gold watch, pearl necklace, or structured leather handbag",
        Aesthetic::Streetwear => "Consider chunky sneakers, a baseball cap, or a statement chain",
        Aesthetic::Minimalist => "Keep it simple with a delicate watch or single piece of geometric jewelry",
        Aesthetic::Maximalist => "Layer multiple statement pieces - bold earrings, colorful scarves, and patterned bags",
        Aesthetic::Coquette => "Add delicate jewelry like layered necklaces, hair bows, or vintage-inspired pieces",
    }
}

fn fit_suggestion(aesthetic: Aesthetic) -> &'static str {
    match aesthetic {
        Aesthetic::Y2k => "Try low-rise jeans with a fitted crop top, or an oversized metallic jacket",
        Aesthetic::OldMoney => "Opt for well-tailored pieces - a structured blazer or perfectly fitted trousers",
        Aesthetic::Streetwear => "Go oversized with hoodies and baggy jeans, or try fitted athleisure",
        Aesthetic::Minimalist => "Choose clean, structured silhouettes that skim your body without being tight",
        Aesthetic::Maximalist => "Mix different fits - pair oversized tops with fitted bottoms or vice versa",
        Aesthetic::Coquette => "Try fitted bodices with flowy skirts, or cropped cardigans with high-waisted bottoms",
    }
}

fn style_suggestion(aesthetic: Aesthetic) -> &'static str {
    match aesthetic {
        Aesthetic::Y2k => "Add tech-wear elements like cargo pants with straps or LED accessories",
        Aesthetic::OldMoney => "Layer a cashmere sweater under a blazer for sophisticated texture",
        Aesthetic::Streetwear => "Try layering a long-sleeve shirt under a graphic tee for urban style",
        Aesthetic::Minimalist => "Focus on quality fabrics and clean lines - less is truly more",
        Aesthetic::Maximalist => "Don't be afraid to mix patterns - try stripes with florals or polka dots",
        Aesthetic::Coquette => "Add romantic details like lace trim, ruffles, or vintage-inspired buttons",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FitCategory;

    fn sample_features() -> VisualFeatures {
        VisualFeatures {
            dominant_colors: vec!["navy".to_string(), "brown".to_string()],
            accessory_count: 2,
            fit: FitCategory::Fitted,
            style_complexity: 0.4,
            color_harmony: 0.9,
        }
    }

    fn categories(improvements: &[Improvement]) -> Vec<ImprovementCategory> {
        improvements.iter().map(|i| i.category).collect()
    }

    #[test]
    fn test_feedback_bands() {
        let features = sample_features();

        let mastered = generate_feedback(&ScoreSet::from_parts(9, 9, 9, 9), Aesthetic::OldMoney, &features);
        assert!(mastered.contains("mastered the Old money aesthetic"));
        assert!(mastered.contains("(0.9/1.0)"));

        let great = generate_feedback(&ScoreSet::from_parts(8, 7, 7, 7), Aesthetic::OldMoney, &features);
        assert!(great.starts_with("Great Old money foundation!"));
        assert!(great.contains("Your fitted fit works well with your navy and brown color palette"));

        let basics = generate_feedback(&ScoreSet::from_parts(6, 5, 5, 6), Aesthetic::Streetwear, &features);
        assert!(basics.contains("understand the Streetwear aesthetic basics"));
        assert!(basics.contains("current navy and brown combination"));

        let needs_work = generate_feedback(&ScoreSet::from_parts(3, 3, 4, 3), Aesthetic::Y2k, &features);
        assert!(needs_work.contains("needs work to capture the true Y2k essence"));
        assert!(needs_work.contains("fit (currently fitted)"));
    }

    #[test]
    fn test_only_style_when_everything_scores_well() {
        let improvements = generate_improvements(&ScoreSet::from_parts(7, 7, 7, 5), Aesthetic::Minimalist);
        assert_eq!(categories(&improvements), vec![ImprovementCategory::Style]);
        assert_eq!(improvements[0].impact, Impact::Medium);
        assert_eq!(improvements[0].reason, "This will enhance your minimalist aesthetic");
    }

    #[test]
    fn test_style_fills_remaining_slot() {
        let improvements = generate_improvements(&ScoreSet::from_parts(8, 6, 6, 5), Aesthetic::Coquette);
        assert_eq!(
            categories(&improvements),
            vec![
                ImprovementCategory::Color,
                ImprovementCategory::Accessory,
                ImprovementCategory::Style,
            ]
        );
        assert_eq!(improvements[0].impact, Impact::High);
        assert_eq!(improvements[1].impact, Impact::Medium);
    }

    #[test]
    fn test_style_dropped_when_three_categories_trigger() {
        let improvements = generate_improvements(&ScoreSet::from_parts(6, 3, 6, 6), Aesthetic::Y2k);
        assert_eq!(
            categories(&improvements),
            vec![
                ImprovementCategory::Color,
                ImprovementCategory::Accessory,
                ImprovementCategory::Fit,
            ]
        );
        assert_eq!(improvements[2].impact, Impact::High);
    }

    #[test]
    fn test_improvement_serialization() {
        let improvements = generate_improvements(&ScoreSet::from_parts(8, 9, 9, 9), Aesthetic::OldMoney);
        insta::assert_json_snapshot!(improvements, @r#"
        [
          {
            "category": "style",
            "suggestion": "Layer a cashmere sweater under a blazer for sophisticated texture",
            "impact": "medium",
            "reason": "This will enhance your old-money aesthetic"
          }
        ]
        "#);
    }
}
