//! Aesthetic categories used to parameterize scoring

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of style aesthetics an outfit can be rated against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Aesthetic {
    /// Early-2000s metallics and tech-wear
    #[default]
    #[serde(rename = "y2k")]
    Y2k,
    /// Tailored neutrals and quiet luxury
    OldMoney,
    /// Clean lines, few pieces
    Minimalist,
    /// Bold colors, layered statement pieces
    Maximalist,
    /// Oversized urban fits
    Streetwear,
    /// Soft, romantic femininity
    Coquette,
}

impl Aesthetic {
    /// Get the canonical label for this aesthetic
    pub fn as_str(&self) -> &'static str {
        match self {
            Aesthetic::Y2k => "y2k",
            Aesthetic::OldMoney => "old-money",
            Aesthetic::Minimalist => "minimalist",
            Aesthetic::Maximalist => "maximalist",
            Aesthetic::Streetwear => "streetwear",
            Aesthetic::Coquette => "coquette",
        }
    }

    /// Get the human-facing name: capitalized, with the hyphen spelled as a space
    pub fn display_name(&self) -> &'static str {
        match self {
            Aesthetic::Y2k => "Y2k",
            Aesthetic::OldMoney => "Old money",
            Aesthetic::Minimalist => "Minimalist",
            Aesthetic::Maximalist => "Maximalist",
            Aesthetic::Streetwear => "Streetwear",
            Aesthetic::Coquette => "Coquette",
        }
    }

    /// Get all supported aesthetics
    pub fn all() -> Vec<Aesthetic> {
        vec![
            Aesthetic::Y2k,
            Aesthetic::OldMoney,
            Aesthetic::Minimalist,
            Aesthetic::Maximalist,
            Aesthetic::Streetwear,
            Aesthetic::Coquette,
        ]
    }

    /// Parse from a label, returning `None` for anything outside the set
    pub fn parse(label: &str) -> Option<Aesthetic> {
        match label.trim().to_ascii_lowercase().as_str() {
            "y2k" => Some(Aesthetic::Y2k),
            "old-money" => Some(Aesthetic::OldMoney),
            "minimalist" => Some(Aesthetic::Minimalist),
            "maximalist" => Some(Aesthetic::Maximalist),
            "streetwear" => Some(Aesthetic::Streetwear),
            "coquette" => Some(Aesthetic::Coquette),
            _ => None,
        }
    }

    /// Parse from a label, falling back to the default aesthetic (y2k)
    pub fn from_label(label: &str) -> Aesthetic {
        Self::parse(label).unwrap_or_default()
    }

    /// Accessory count that scores best for this aesthetic
    pub fn ideal_accessory_count(&self) -> u8 {
        match self {
            Aesthetic::Minimalist => 1,
            Aesthetic::OldMoney => 2,
            Aesthetic::Streetwear => 3,
            Aesthetic::Y2k => 4,
            Aesthetic::Maximalist => 5,
            Aesthetic::Coquette => 3,
        }
    }

    /// Three short tips shown next to a result
    pub fn quick_tips(&self) -> [&'static str; 3] {
        match self {
            Aesthetic::Y2k => [
                "Add metallic accessories",
                "Try low-rise bottoms",
                "Include tech-wear elements",
            ],
            Aesthetic::OldMoney => [
                "Invest in quality fabrics",
                "Choose neutral colors",
                "Add classic accessories",
            ],
            Aesthetic::Minimalist => [
                "Stick to basic colors",
                "Focus on fit and silhouette",
                "Remove unnecessary details",
            ],
            Aesthetic::Maximalist => [
                "Mix bold patterns",
                "Layer accessories",
                "Embrace bright colors",
            ],
            Aesthetic::Streetwear => [
                "Add statement sneakers",
                "Include graphic elements",
                "Try oversized fits",
            ],
            Aesthetic::Coquette => [
                "Add feminine touches",
                "Choose soft colors",
                "Include romantic details",
            ],
        }
    }
}

impl fmt::Display for Aesthetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
