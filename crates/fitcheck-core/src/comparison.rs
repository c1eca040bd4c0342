//! Before/after comparison of two ratings

use serde::{Deserialize, Serialize};

use crate::analyzer::StyleAnalysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleComparison {
    pub before_score: u8,
    pub after_score: u8,
    /// `after - before`
    pub difference: i16,
    pub improved: bool,
}

impl StyleComparison {
    pub fn between(before_score: u8, after_score: u8) -> Self {
        Self {
            before_score,
            after_score,
            difference: i16::from(after_score) - i16::from(before_score),
            improved: after_score > before_score,
        }
    }

    pub fn of(before: &StyleAnalysis, after: &StyleAnalysis) -> Self {
        Self::between(before.overall_score, after.overall_score)
    }

    /// One-line summary of the change
    pub fn headline(&self) -> String {
        let points = |n: i16| if n == 1 { "Point" } else { "Points" };
        match self.difference {
            0 => "No change yet".to_string(),
            d if d > 0 => format!("+{} {} Improvement!", d, points(d)),
            d => format!("Down {} {}", -d, points(-d).to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headlines() {
        assert_eq!(StyleComparison::between(5, 6).headline(), "+1 Point Improvement!");
        assert_eq!(StyleComparison::between(5, 8).headline(), "+3 Points Improvement!");
        assert_eq!(StyleComparison::between(7, 7).headline(), "No change yet");
        assert_eq!(StyleComparison::between(7, 6).headline(), "Down 1 point");
        assert_eq!(StyleComparison::between(9, 5).headline(), "Down 4 points");
    }

    #[test]
    fn test_difference_sign() {
        let comparison = StyleComparison::between(8, 5);
        assert_eq!(comparison.difference, -3);
        assert!(!comparison.improved);

        let comparison = StyleComparison::between(5, 8);
        assert_eq!(comparison.difference, 3);
        assert!(comparison.improved);
    }

    #[test]
    fn test_compares_analyses() {
        let before = crate::score("photo.jpg", "minimalist");
        let after = crate::score("abc123.png", "minimalist");
        let comparison = StyleComparison::of(&before, &after);
        assert_eq!(comparison.before_score, 6);
        assert_eq!(comparison.after_score, 8);
        assert!(comparison.improved);
    }
}
