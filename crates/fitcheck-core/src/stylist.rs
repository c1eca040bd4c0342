//! Offline stylist: keyword intent detection and aesthetic-aware advice

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::aesthetic::Aesthetic;

/// What the user is asking the stylist about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylistIntent {
    ColorAdvice,
    AccessoryAdvice,
    FitAdvice,
    ShoppingAdvice,
    ImprovementAdvice,
    StyleAdvice,
    GeneralHelp,
    GeneralChat,
}

/// What the stylist knows about the current outfit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StylistContext {
    pub aesthetic: Aesthetic,
    pub current_score: u8,
    pub dominant_colors: Vec<String>,
    pub user_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylistReply {
    pub intent: StylistIntent,
    pub response: String,
    pub suggestions: Vec<String>,
    pub actionable_items: Vec<String>,
}

/// Per-aesthetic advice snippets
struct AestheticAdvice {
    color: &'static str,
    accessories: &'static str,
    fit: &'static str,
    enhancement: &'static str,
}

/// Intent patterns; first match wins, so order matters
const INTENT_PATTERNS: [(StylistIntent, &str); 7] = [
    (StylistIntent::ColorAdvice, r"(?i)\bcolou?rs?\b"),
    (StylistIntent::AccessoryAdvice, r"(?i)\baccessor(y|ies|ize|ise)\b"),
    (StylistIntent::FitAdvice, r"(?i)\b(fit\w*|sizing)\b"),
    (StylistIntent::ShoppingAdvice, r"(?i)\b(shop\w*|buy|where)\b"),
    (StylistIntent::ImprovementAdvice, r"(?i)\b(improve\w*|better|fix\w*)\b"),
    (StylistIntent::StyleAdvice, r"(?i)\b(style\w*|aesthetic)\b"),
    (StylistIntent::GeneralHelp, r"(?i)\b(help|suggestions?)\b"),
];

static COMPILED_PATTERNS: LazyLock<Vec<(StylistIntent, Regex)>> = LazyLock::new(|| {
    INTENT_PATTERNS
        .iter()
        .map(|&(intent, pattern)| {
            let re = Regex::new(pattern).expect("intent patterns are valid regexes");
            (intent, re)
        })
        .collect()
});

/// Stylist that answers from fixed per-aesthetic advice tables
pub struct Stylist {
    intent_patterns: &'static [(StylistIntent, Regex)],
}

impl Stylist {
    pub fn new() -> Self {
        Self {
            intent_patterns: COMPILED_PATTERNS.as_slice(),
        }
    }

    /// Detect the intent of a message
    pub fn detect_intent(&self, message: &str) -> StylistIntent {
        self.intent_patterns
            .iter()
            .find(|(_, pattern)| pattern.is_match(message))
            .map(|(intent, _)| *intent)
            .unwrap_or(StylistIntent::GeneralChat)
    }

    /// Answer a message in the context of the current outfit
    pub fn reply(&self, context: &StylistContext) -> StylistReply {
        let intent = self.detect_intent(&context.user_message);

        StylistReply {
            intent,
            response: self.response(intent, context),
            suggestions: self.suggestions(intent, context),
            actionable_items: self.actionable_items(context.aesthetic),
        }
    }

    fn response(&self, intent: StylistIntent, context: &StylistContext) -> String {
        let name = context.aesthetic.display_name();
        let advice = advice_for(context.aesthetic);

        match intent {
            StylistIntent::ColorAdvice => format!(
                "Let's talk colors for your {} vibe! {} Based on {}, here's what would make it pop even more!",
                name,
                advice.color,
                describe_colors(&context.dominant_colors)
            ),
            StylistIntent::AccessoryAdvice => format!(
                "Accessories can totally transform your look! {} Since you're going for {}, these pieces would be perfect!",
                advice.accessories, name
            ),
            StylistIntent::FitAdvice => format!(
                "The fit is everything! {} This will elevate your {} aesthetic.",
                advice.fit, name
            ),
            StylistIntent::ShoppingAdvice => format!(
                "Let me help you find the perfect pieces! For your {} aesthetic, look for stores and brands that really nail this vibe.",
                name
            ),
            StylistIntent::ImprovementAdvice => format!(
                "I see so much potential here! With your current {}/10 score, we can get you to the next level. \
                 Here are the changes that will have the biggest impact on your {} look.",
                context.current_score, name
            ),
            StylistIntent::StyleAdvice => format!(
                "Your {} journey is looking amazing! {} Here are some insider tips to make this aesthetic shine.",
                name, advice.enhancement
            ),
            StylistIntent::GeneralHelp => format!(
                "I'm here to help you serve the best {} looks! Ask me about colors, fits, accessories, or shopping.",
                name
            ),
            StylistIntent::GeneralChat => format!(
                "Loving the {} energy! Your current look has great potential. Let me help you take it to the next level.",
                name
            ),
        }
    }

    fn suggestions(&self, intent: StylistIntent, context: &StylistContext) -> Vec<String> {
        let aesthetic = context.aesthetic;

        match intent {
            StylistIntent::ColorAdvice => {
                let base = context
                    .dominant_colors
                    .first()
                    .map(String::as_str)
                    .unwrap_or("main");
                vec![
                    format!("Try adding {} to your current palette", palette_addition(aesthetic)),
                    format!("Replace your {} piece with {}", base, alternative_color(aesthetic)),
                    format!("Add a pop of {} through accessories", accent_color(aesthetic)),
                ]
            }
            StylistIntent::AccessoryAdvice => vec![
                accessory_pick(aesthetic).to_string(),
                jewelry_pick(aesthetic).to_string(),
                bag_pick(aesthetic).to_string(),
            ],
            _ => vec![
                high_impact_change(aesthetic).to_string(),
                medium_impact_change(aesthetic).to_string(),
                quick_fix(aesthetic).to_string(),
            ],
        }
    }

    fn actionable_items(&self, aesthetic: Aesthetic) -> Vec<String> {
        vec![
            format!("Shop for {} essentials", aesthetic),
            "Try a new color palette".to_string(),
            "Experiment with different fits".to_string(),
            "Add signature accessories".to_string(),
            "Mix textures and patterns".to_string(),
        ]
    }
}

impl Default for Stylist {
    fn default() -> Self {
        Self::new()
    }
}

fn describe_colors(colors: &[String]) -> String {
    if colors.is_empty() {
        "your current palette".to_string()
    } else {
        format!("your current {} palette", colors.join(" and "))
    }
}

fn advice_for(aesthetic: Aesthetic) -> AestheticAdvice {
    match aesthetic {
        Aesthetic::Y2k => AestheticAdvice {
            color: "Think metallics, neon pinks, electric blues, and holographic elements. Chrome and silver accessories are essential.",
            accessories: "Chunky platforms, metallic bags, chrome jewelry, tech-wear elements, and futuristic sunglasses.",
            fit: "Mix fitted crop tops with low-rise bottoms, or go oversized with metallic jackets. Contrast is key.",
            enhancement: "Add LED elements, holographic details, or metallic fabrics.",
        },
        Aesthetic::OldMoney => AestheticAdvice {
            color: "Stick to timeless neutrals: cream, navy, camel, forest green, and classic black or white.",
            accessories: "Pearl jewelry, gold watches, structured leather bags, silk scarves, and classic sunglasses.",
            fit: "Tailored and sophisticated: well-fitted blazers, straight-leg trousers, pieces that skim the body.",
            enhancement: "Invest in cashmere, silk, and wool, and layer thoughtfully with timeless pieces.",
        },
        Aesthetic::Streetwear => AestheticAdvice {
            color: "Urban palette: black, white, and grey with pops of bright color and bold logos.",
            accessories: "Chunky sneakers, baseball caps, chain jewelry, backpacks, and logo-heavy pieces.",
            fit: "Oversized hoodies, baggy jeans, or fitted athleisure. Mix proportions for visual interest.",
            enhancement: "Layer textures, mix high and low brands, and make statement sneakers the focal point.",
        },
        Aesthetic::Minimalist => AestheticAdvice {
            color: "Less is more: monochromatic palettes, neutral tones, and clean color blocking.",
            accessories: "Simple geometric jewelry, structured bags, classic watches, and clean-lined pieces.",
            fit: "Clean, structured silhouettes that fit perfectly, without excess fabric or tightness.",
            enhancement: "Choose quality over quantity and pieces with subtle architectural details.",
        },
        Aesthetic::Maximalist => AestheticAdvice {
            color: "More is more! Mix bold colors, clash patterns, and embrace rainbow palettes.",
            accessories: "Statement earrings, layered necklaces, colorful bags, and bold prints everywhere.",
            fit: "Mix fits and proportions: oversized with fitted, structured with flowy.",
            enhancement: "Layer patterns, mix textures wildly, and add as many statement pieces as you can handle.",
        },
        Aesthetic::Coquette => AestheticAdvice {
            color: "Soft and romantic: blush pink, cream, white, and dreamy pastels.",
            accessories: "Delicate jewelry, hair bows, vintage-inspired pieces, and romantic details.",
            fit: "Fitted bodices with flowy skirts and cropped cardigans that frame your silhouette.",
            enhancement: "Add lace, ruffles, vintage buttons, and other feminine touches.",
        },
    }
}

fn palette_addition(aesthetic: Aesthetic) -> &'static str {
    match aesthetic {
        Aesthetic::Y2k => "metallic silver or holographic pink",
        Aesthetic::OldMoney => "cream or navy blue",
        Aesthetic::Streetwear => "neon green or electric blue",
        Aesthetic::Minimalist => "pure white or deep black",
        Aesthetic::Maximalist => "bright orange or electric purple",
        Aesthetic::Coquette => "soft blush pink or lavender",
    }
}

fn alternative_color(aesthetic: Aesthetic) -> &'static str {
    match aesthetic {
        Aesthetic::Y2k => "chrome silver",
        Aesthetic::OldMoney => "sophisticated camel",
        Aesthetic::Streetwear => "urban black",
        Aesthetic::Minimalist => "pure white",
        Aesthetic::Maximalist => "bold fuchsia",
        Aesthetic::Coquette => "romantic cream",
    }
}

fn accent_color(aesthetic: Aesthetic) -> &'static str {
    match aesthetic {
        Aesthetic::Y2k => "electric blue",
        Aesthetic::OldMoney => "gold",
        Aesthetic::Streetwear => "neon yellow",
        Aesthetic::Minimalist => "soft grey",
        Aesthetic::Maximalist => "rainbow gradient",
        Aesthetic::Coquette => "rose gold",
    }
}

fn accessory_pick(aesthetic: Aesthetic) -> &'static str {
    match aesthetic {
        Aesthetic::Y2k => "Add chunky platform boots or a holographic bag",
        Aesthetic::OldMoney => "Try a structured leather handbag or pearl necklace",
        Aesthetic::Streetwear => "Consider chunky white sneakers or a baseball cap",
        Aesthetic::Minimalist => "Add a simple gold watch or geometric earrings",
        Aesthetic::Maximalist => "Layer bold statement necklaces or colorful scarves",
        Aesthetic::Coquette => "Try delicate hair bows or vintage-inspired jewelry",
    }
}

fn jewelry_pick(aesthetic: Aesthetic) -> &'static str {
    match aesthetic {
        Aesthetic::Y2k => "Chrome chains or metallic chokers",
        Aesthetic::OldMoney => "Classic gold watch or pearl earrings",
        Aesthetic::Streetwear => "Chunky chain necklace or hoop earrings",
        Aesthetic::Minimalist => "Delicate gold rings or simple studs",
        Aesthetic::Maximalist => "Mix multiple bold pieces together",
        Aesthetic::Coquette => "Layered delicate necklaces or vintage rings",
    }
}

fn bag_pick(aesthetic: Aesthetic) -> &'static str {
    match aesthetic {
        Aesthetic::Y2k => "Holographic mini bag or metallic backpack",
        Aesthetic::OldMoney => "Structured leather tote or classic clutch",
        Aesthetic::Streetwear => "Oversized backpack or crossbody bag",
        Aesthetic::Minimalist => "Clean-lined tote or simple crossbody",
        Aesthetic::Maximalist => "Bold patterned bag or colorful statement piece",
        Aesthetic::Coquette => "Vintage-inspired purse or delicate chain bag",
    }
}

fn high_impact_change(aesthetic: Aesthetic) -> &'static str {
    match aesthetic {
        Aesthetic::Y2k => "Switch to low-rise jeans with a metallic crop top",
        Aesthetic::OldMoney => "Add a perfectly tailored blazer in navy or camel",
        Aesthetic::Streetwear => "Try an oversized hoodie with a fitted bottom half",
        Aesthetic::Minimalist => "Choose one standout piece in a perfect neutral tone",
        Aesthetic::Maximalist => "Layer 3+ bold patterns together confidently",
        Aesthetic::Coquette => "Add a flowy midi skirt with a fitted feminine top",
    }
}

fn medium_impact_change(aesthetic: Aesthetic) -> &'static str {
    match aesthetic {
        Aesthetic::Y2k => "Add platform shoes or metallic accessories",
        Aesthetic::OldMoney => "Include a silk scarf or cashmere sweater",
        Aesthetic::Streetwear => "Incorporate logo pieces or statement sneakers",
        Aesthetic::Minimalist => "Focus on quality fabrics and perfect fit",
        Aesthetic::Maximalist => "Add more colorful or patterned accessories",
        Aesthetic::Coquette => "Include lace details or romantic accessories",
    }
}

fn quick_fix(aesthetic: Aesthetic) -> &'static str {
    match aesthetic {
        Aesthetic::Y2k => "Add chrome jewelry or holographic nail polish",
        Aesthetic::OldMoney => "Tuck in your shirt and add a belt",
        Aesthetic::Streetwear => "Roll up sleeves or add a cap",
        Aesthetic::Minimalist => "Remove one accessory for a cleaner look",
        Aesthetic::Maximalist => "Add one more bold element",
        Aesthetic::Coquette => "Add a hair bow or delicate bracelet",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_intent_pattern_compiles() {
        let stylist = Stylist::new();
        assert_eq!(stylist.intent_patterns.len(), INTENT_PATTERNS.len());

        let intents: Vec<StylistIntent> = stylist.intent_patterns.iter().map(|(intent, _)| *intent).collect();
        let expected: Vec<StylistIntent> = INTENT_PATTERNS.iter().map(|(intent, _)| *intent).collect();
        assert_eq!(intents, expected);
    }

    fn context(aesthetic: Aesthetic, message: &str) -> StylistContext {
        StylistContext {
            aesthetic,
            current_score: 6,
            dominant_colors: vec!["navy".to_string(), "brown".to_string()],
            user_message: message.to_string(),
        }
    }

    #[test]
    fn test_intent_detection() {
        let stylist = Stylist::new();

        assert_eq!(stylist.detect_intent("What colour goes with this?"), StylistIntent::ColorAdvice);
        assert_eq!(stylist.detect_intent("any accessories?"), StylistIntent::AccessoryAdvice);
        assert_eq!(stylist.detect_intent("Does this fit right"), StylistIntent::FitAdvice);
        assert_eq!(stylist.detect_intent("where can I buy boots"), StylistIntent::ShoppingAdvice);
        assert_eq!(stylist.detect_intent("how do I improve this"), StylistIntent::ImprovementAdvice);
        assert_eq!(stylist.detect_intent("is this my aesthetic"), StylistIntent::StyleAdvice);
        assert_eq!(stylist.detect_intent("help"), StylistIntent::GeneralHelp);
        assert_eq!(stylist.detect_intent("hi there"), StylistIntent::GeneralChat);
    }

    #[test]
    fn test_first_matching_intent_wins() {
        let stylist = Stylist::new();

        // color is checked before fit and shopping
        assert_eq!(
            stylist.detect_intent("where do I buy colors that fit"),
            StylistIntent::ColorAdvice
        );
        // "outfit" is not a fit question
        assert_eq!(stylist.detect_intent("rate my outfit"), StylistIntent::GeneralChat);
    }

    #[test]
    fn test_color_reply_uses_outfit_colors() {
        let stylist = Stylist::new();
        let reply = stylist.reply(&context(Aesthetic::OldMoney, "which colors work?"));

        assert_eq!(reply.intent, StylistIntent::ColorAdvice);
        assert!(reply.response.contains("your Old money vibe"));
        assert!(reply.response.contains("navy and brown palette"));
        assert_eq!(
            reply.suggestions,
            vec![
                "Try adding cream or navy blue to your current palette",
                "Replace your navy piece with sophisticated camel",
                "Add a pop of gold through accessories",
            ]
        );
    }

    #[test]
    fn test_other_intents_get_improvement_suggestions() {
        let stylist = Stylist::new();
        let reply = stylist.reply(&context(Aesthetic::Streetwear, "make it better"));

        assert_eq!(reply.intent, StylistIntent::ImprovementAdvice);
        assert!(reply.response.contains("6/10"));
        assert_eq!(reply.suggestions[2], "Roll up sleeves or add a cap");
        assert_eq!(reply.actionable_items.len(), 5);
        assert_eq!(reply.actionable_items[0], "Shop for streetwear essentials");
    }

    #[test]
    fn test_accessory_reply_snapshot() {
        let stylist = Stylist::new();
        let reply = stylist.reply(&context(Aesthetic::Coquette, "what accessory should I add?"));

        insta::assert_json_snapshot!(reply.suggestions, @r#"
        [
          "Try delicate hair bows or vintage-inspired jewelry",
          "Layered delicate necklaces or vintage rings",
          "Vintage-inspired purse or delicate chain bag"
        ]
        "#);
    }
}
