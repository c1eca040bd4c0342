//! Terminal output for ratings, comparisons and the stylist chat

use colored::*;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, size},
};
use std::io::{self, BufRead, IsTerminal, Write};

use fitcheck_core::{Aesthetic, Result, ScoreBand, StyleAnalysis, StylistReply, VisualFeatures};

use crate::rater::{ImprovementReport, Rating, RatingSource};

const PROMPT: &str = "fitcheck>";

/// Color a score by its band
pub fn paint_score(score: u8) -> ColoredString {
    let text = format!("{}/10", score);
    match ScoreBand::for_score(score) {
        ScoreBand::Mastered => text.green().bold(),
        ScoreBand::GreatFoundation => text.yellow().bold(),
        ScoreBand::Basics => text.truecolor(249, 115, 22).bold(),
        ScoreBand::NeedsWork => text.red().bold(),
    }
}

/// Display the chat banner
pub fn display_banner(aesthetic: Aesthetic) {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let banner_width = std::cmp::min(60, terminal_width.saturating_sub(4)).max(40);
    let inner = banner_width - 2;

    let line = |content: &str| {
        let padding = inner.saturating_sub(content.chars().count() + 2);
        format!("│  {}{}│", content, " ".repeat(padding))
    };

    println!();
    println!("{}", format!("┌{}┐", "─".repeat(inner)).magenta());
    println!("{}", line("Fit Check Stylist").magenta().bold());
    println!("{}", line("").magenta());
    println!("{}", line(&format!("Aesthetic: {}", aesthetic.display_name())).magenta());
    println!("{}", line("Ask about colors, fit, accessories or shopping").magenta());
    println!("{}", format!("└{}┘", "─".repeat(inner)).magenta());
    println!();
    println!("{}", "Tip: type 'help' for commands, 'exit' to leave".dimmed());
    println!();
}

/// Print a rating with its sub-scores when available
pub fn print_rating(rating: &Rating, aesthetic: Aesthetic) {
    println!();
    println!(
        "{} {} {}",
        "Style score:".bold(),
        paint_score(rating.overall_score()),
        format!("({})", aesthetic.display_name()).dimmed()
    );

    match rating {
        Rating::Heuristic(analysis) => print_sub_scores(analysis),
        Rating::Model(analysis) => {
            let areas = &analysis.improvement_areas;
            println!("  {:<12} {}", "Fit", paint_score(areas.fit));
            println!("  {:<12} {}", "Color", paint_score(areas.color));
            println!("  {:<12} {}", "Accessories", paint_score(areas.accessories));
            println!("  {:<12} {}", "Layering", paint_score(areas.layering));
        }
    }

    println!();
    println!("{}", rating.feedback());
    println!();

    match rating {
        Rating::Heuristic(analysis) => {
            println!("{}", "Improvements:".bold());
            for improvement in &analysis.improvements {
                println!(
                    "  {} {} {}",
                    "•".cyan(),
                    improvement.suggestion,
                    format!("[{:?} impact]", improvement.impact).to_lowercase().dimmed()
                );
                println!("    {}", improvement.reason.dimmed());
            }
        }
        Rating::Model(analysis) => {
            println!("{}", "Suggestions:".bold());
            for suggestion in &analysis.suggestions {
                println!("  {} {}", "•".cyan(), suggestion);
            }
        }
    }

    println!();
    println!("{}", "Quick tips:".bold());
    for tip in aesthetic.quick_tips() {
        println!("  {} {}", "→".green(), tip);
    }

    if rating.source() == RatingSource::Heuristic {
        println!();
        println!("{}", "Scored offline with the deterministic scorer".dimmed());
    }
}

fn print_sub_scores(analysis: &StyleAnalysis) {
    println!("  {:<12} {}", "Fit", paint_score(analysis.fit_score));
    println!("  {:<12} {}", "Color", paint_score(analysis.color_score));
    println!("  {:<12} {}", "Accessories", paint_score(analysis.accessory_score));
    println!("  {:<12} {}", "Trend", paint_score(analysis.trend_score));
}

/// Print the pseudo visual features behind a heuristic score
pub fn print_features(features: &VisualFeatures) {
    println!("{}", "Detected features:".bold());
    println!("  {:<18} {}", "Dominant colors", features.dominant_colors.join(", "));
    println!("  {:<18} {}", "Accessories", features.accessory_count);
    println!("  {:<18} {}", "Fit", features.fit);
    println!("  {:<18} {:.1}", "Style complexity", features.style_complexity);
    println!("  {:<18} {:.1}", "Color harmony", features.color_harmony);
}

/// Print a before/after comparison
pub fn print_improvement(report: &ImprovementReport, aesthetic: Aesthetic) {
    let comparison = &report.comparison;

    println!();
    println!("{} {}", "Before vs After".bold(), format!("({})", aesthetic.display_name()).dimmed());
    println!(
        "  {} {} {}",
        paint_score(comparison.before_score),
        "→".bold(),
        paint_score(comparison.after_score)
    );

    let headline = comparison.headline();
    if comparison.improved {
        println!("  {}", headline.green().bold());
    } else {
        println!("  {}", headline.yellow());
    }

    println!();
    println!("{}", report.feedback);

    if !report.suggestions.is_empty() {
        println!();
        println!("{}", "Next steps:".bold());
        for suggestion in &report.suggestions {
            println!("  {} {}", "•".cyan(), suggestion);
        }
    }
}

/// Print a stylist reply
pub fn print_stylist_reply(reply: &StylistReply) {
    println!();
    println!("{} {}", "stylist:".magenta().bold(), reply.response);
    for suggestion in &reply.suggestions {
        println!("  {} {}", "•".cyan(), suggestion);
    }
    println!();
}

/// Print the aesthetic list with quick tips
pub fn print_aesthetics() {
    for aesthetic in Aesthetic::all() {
        println!(
            "{} {}",
            format!("{:<12}", aesthetic.as_str()).green().bold(),
            aesthetic.display_name().dimmed()
        );
        for tip in aesthetic.quick_tips() {
            println!("  {} {}", "•".cyan(), tip);
        }
    }
}

/// Display the chat help message
pub fn print_help() {
    println!("{}", "Available commands:".bold());
    println!("  {} - Ask the stylist anything about your outfit", "message".green());
    println!("  {} - Switch aesthetic", "aesthetic <name>".green());
    println!("  {} - Show the actionable checklist", "todo".green());
    println!("  {} - Show this help message", "help".green());
    println!("  {} - Exit the chat", "exit/quit".green());
    println!();
    println!("{}", "Examples:".bold());
    println!("  what colors should I add?");
    println!("  where can I shop for this look");
    println!("  aesthetic old-money");
}

/// Read a line with history navigation (↑/↓), Esc to clear.
///
/// Returns `None` at end of input or on Ctrl+C / Ctrl+D.
pub fn handle_input_with_history(history: &mut Vec<String>) -> Result<Option<String>> {
    if !io::stdin().is_terminal() {
        return read_line_from(&mut io::stdin().lock(), history);
    }

    enable_raw_mode()?;
    let result = read_raw_line(history);
    disable_raw_mode()?;
    println!();

    let input = result?;
    if let Some(line) = &input {
        if !line.is_empty() {
            history.push(line.clone());
        }
    }
    Ok(input)
}

/// Read one trimmed line from a non-interactive source, `None` at end of input
pub fn read_line_from<R: BufRead>(reader: &mut R, history: &mut Vec<String>) -> Result<Option<String>> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }

    let input = input.trim().to_string();
    if !input.is_empty() {
        history.push(input.clone());
    }
    Ok(Some(input))
}

/// Ctrl+C or Ctrl+D ends the chat instead of being typed
fn is_interrupt(key_event: &KeyEvent) -> bool {
    key_event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('d'))
}

fn redraw(input: &str) -> io::Result<()> {
    print!("\r\x1b[2K{} {}", PROMPT.magenta().bold(), input);
    io::stdout().flush()
}

fn read_raw_line(history: &[String]) -> Result<Option<String>> {
    let mut input = String::new();
    let mut history_index: Option<usize> = None;

    redraw(&input)?;

    loop {
        let Event::Key(key_event) = event::read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        if is_interrupt(&key_event) {
            return Ok(None);
        }

        match key_event.code {
            KeyCode::Enter => return Ok(Some(input)),
            KeyCode::Esc => return Ok(Some(String::new())),
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Up if !history.is_empty() => {
                let new_index = match history_index {
                    None => history.len() - 1,
                    Some(idx) => idx.saturating_sub(1),
                };
                history_index = Some(new_index);
                input = history[new_index].clone();
            }
            KeyCode::Down => {
                if let Some(idx) = history_index {
                    if idx + 1 < history.len() {
                        history_index = Some(idx + 1);
                        input = history[idx + 1].clone();
                    } else {
                        history_index = None;
                        input.clear();
                    }
                }
            }
            _ => continue,
        }

        redraw(&input)?;
    }
}
