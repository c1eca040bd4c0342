//! Aesthetic scoring rules

use serde::{Deserialize, Serialize};

use crate::aesthetic::Aesthetic;
use crate::features::{FitCategory, VisualFeatures};

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

/// Trend score before any aesthetic bonus
const BASE_TREND_SCORE: i32 = 5;

/// Sub-scores and their rounded average, all in `1..=10`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub overall: u8,
    pub fit: u8,
    pub color: u8,
    pub accessory: u8,
    pub trend: u8,
}

impl ScoreSet {
    /// Score a set of features against an aesthetic
    pub fn compute(features: &VisualFeatures, aesthetic: Aesthetic) -> Self {
        let fit = fit_score(features.fit);
        let color = (features.color_harmony * 10.0).round() as i32;
        let accessory = accessory_score(features.accessory_count, aesthetic);
        let trend = BASE_TREND_SCORE + aesthetic_bonus(features, aesthetic);

        Self::from_parts(fit, color, accessory, trend)
    }

    /// Clamp raw sub-scores and average them, rounding halves up
    pub fn from_parts(fit: i32, color: i32, accessory: i32, trend: i32) -> Self {
        let fit = clamp_score(fit);
        let color = clamp_score(color);
        let accessory = clamp_score(accessory);
        let trend = clamp_score(trend);

        let sum = [fit, color, accessory, trend]
            .iter()
            .map(|&s| i32::from(s))
            .sum::<i32>();
        // all terms are positive so integer division rounds half up here
        let overall = clamp_score((sum + 2) / 4);

        Self {
            overall,
            fit,
            color,
            accessory,
            trend,
        }
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.overall)
    }
}

/// Overall-score bands used for feedback selection and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreBand {
    /// 9 and above
    Mastered,
    /// 7 and 8
    GreatFoundation,
    /// 5 and 6
    Basics,
    /// Below 5
    NeedsWork,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        if score >= 9 {
            ScoreBand::Mastered
        } else if score >= 7 {
            ScoreBand::GreatFoundation
        } else if score >= 5 {
            ScoreBand::Basics
        } else {
            ScoreBand::NeedsWork
        }
    }
}

/// Clamp a raw score into `1..=10`
pub fn clamp_score(raw: i32) -> u8 {
    raw.clamp(i32::from(MIN_SCORE), i32::from(MAX_SCORE)) as u8
}

/// Fit score is the same for every aesthetic
pub fn fit_score(fit: FitCategory) -> i32 {
    match fit {
        FitCategory::Fitted => 8,
        FitCategory::Loose => 6,
        FitCategory::Oversized => 7,
    }
}

/// Score drops one point per accessory away from the aesthetic's ideal, floor 4
pub fn accessory_score(accessory_count: u8, aesthetic: Aesthetic) -> i32 {
    let ideal = i32::from(aesthetic.ideal_accessory_count());
    let difference = (i32::from(accessory_count) - ideal).abs();
    (9 - difference).max(4)
}

/// Trend bonus (0 to 5 points) for how well the features match the aesthetic
pub fn aesthetic_bonus(features: &VisualFeatures, aesthetic: Aesthetic) -> i32 {
    let accessories = features.accessory_count;
    let color_count = features.dominant_colors.len();
    let mut bonus = 0;

    match aesthetic {
        Aesthetic::Y2k => {
            if features.has_any_color(&["silver", "metallic"]) {
                bonus += 2;
            }
            if accessories >= 3 {
                bonus += 1;
            }
            if features.style_complexity > 0.6 {
                bonus += 1;
            }
        }
        Aesthetic::OldMoney => {
            if features.has_any_color(&["navy", "cream"]) {
                bonus += 2;
            }
            if features.fit == FitCategory::Fitted {
                bonus += 2;
            }
            if features.color_harmony > 0.7 {
                bonus += 1;
            }
        }
        Aesthetic::Streetwear => {
            if features.fit == FitCategory::Oversized {
                bonus += 2;
            }
            if features.has_color("black") {
                bonus += 1;
            }
            if accessories >= 2 {
                bonus += 1;
            }
        }
        Aesthetic::Minimalist => {
            if color_count <= 2 {
                bonus += 2;
            }
            if accessories <= 2 {
                bonus += 2;
            }
            if features.color_harmony > 0.8 {
                bonus += 1;
            }
        }
        Aesthetic::Maximalist => {
            if color_count >= 3 {
                bonus += 2;
            }
            if accessories >= 4 {
                bonus += 2;
            }
            if features.style_complexity > 0.7 {
                bonus += 1;
            }
        }
        Aesthetic::Coquette => {
            if features.has_any_color(&["pink", "white"]) {
                bonus += 2;
            }
            if features.fit == FitCategory::Fitted {
                bonus += 1;
            }
            if accessories >= 2 {
                bonus += 1;
            }
        }
    }

    bonus
}
