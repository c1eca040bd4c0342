//! Pseudo visual feature extraction
//!
//! No pixels are read. The image reference is hashed and every feature is a
//! pure function of that hash, so the same reference always yields the same
//! features.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed color palette, indexed by `(hash + i) % 8`
pub const PALETTE: [&str; 8] = [
    "black", "white", "gray", "navy", "brown", "red", "blue", "green",
];

/// How the outfit sits on the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitCategory {
    Loose,
    Fitted,
    Oversized,
}

impl FitCategory {
    const ORDER: [FitCategory; 3] = [FitCategory::Loose, FitCategory::Fitted, FitCategory::Oversized];

    pub fn as_str(&self) -> &'static str {
        match self {
            FitCategory::Loose => "loose",
            FitCategory::Fitted => "fitted",
            FitCategory::Oversized => "oversized",
        }
    }
}

impl fmt::Display for FitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Features derived from an image reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualFeatures {
    /// One to three palette colors
    pub dominant_colors: Vec<String>,
    /// In `1..=4`
    pub accessory_count: u8,
    pub fit: FitCategory,
    /// In `[0.0, 0.9]`
    pub style_complexity: f64,
    /// In `[0.3, 1.0]`
    pub color_harmony: f64,
}

impl VisualFeatures {
    /// Hash the image reference and derive its features
    pub fn extract(image_ref: &str) -> Self {
        Self::from_hash(image_hash(image_ref))
    }

    /// Derive features from an already computed hash
    pub fn from_hash(hash: u32) -> Self {
        let color_count = hash % 3 + 1;
        let dominant_colors = (0..color_count)
            .map(|i| PALETTE[((hash as u64 + i as u64) % PALETTE.len() as u64) as usize].to_string())
            .collect();

        Self {
            dominant_colors,
            accessory_count: (hash % 4 + 1) as u8,
            fit: FitCategory::ORDER[(hash % 3) as usize],
            style_complexity: (hash % 10) as f64 / 10.0,
            color_harmony: (hash % 8 + 3) as f64 / 10.0,
        }
    }

    /// Check whether a color is among the dominant colors
    pub fn has_color(&self, color: &str) -> bool {
        self.dominant_colors.iter().any(|c| c == color)
    }

    /// Check whether any of the given colors is dominant
    pub fn has_any_color(&self, colors: &[&str]) -> bool {
        colors.iter().any(|color| self.has_color(color))
    }
}

/// Rolling 31x hash over UTF-16 code units with signed 32-bit wraparound.
///
/// Matches `hash = ((hash << 5) - hash) + charCode` truncated to i32 on every
/// step, then takes the absolute value. `i32::MIN` maps to `2^31`.
pub fn image_hash(image_ref: &str) -> u32 {
    image_ref
        .encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}
