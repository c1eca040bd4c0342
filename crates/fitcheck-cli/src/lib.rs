//! Rating orchestration and terminal UI for Fit Check

mod rater;
mod ui;


pub use rater::{ImprovementReport, OutfitRater, Rating, RatingSource};
pub use ui::{
    display_banner, handle_input_with_history, paint_score, print_aesthetics, print_features,
    print_help, print_improvement, print_rating, print_stylist_reply, read_line_from,
};

// Re-export core types
pub use fitcheck_core::{Error, Result};
