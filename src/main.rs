use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

use fitcheck_cli::{
    OutfitRater, display_banner, handle_input_with_history, print_aesthetics, print_features,
    print_help, print_improvement, print_rating, print_stylist_reply,
};
use fitcheck_core::{Aesthetic, StyleScorer, Stylist, StylistContext, StylistReply};
use fitcheck_openai::OpenAiClient;

/// Score used by the stylist when no outfit image is given
const NEUTRAL_SCORE: u8 = 5;

#[derive(Parser)]
#[command(name = "fitcheck")]
#[command(about = "Rate outfits against an aesthetic and get improvement tips", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rate a single outfit image
    Score {
        /// Image path, URL or data URL
        image: String,
        #[command(flatten)]
        style: StyleArgs,
        /// Print the detected visual features as well
        #[arg(long)]
        features: bool,
    },
    /// Compare a before and after outfit
    Compare {
        before: String,
        after: String,
        #[command(flatten)]
        style: StyleArgs,
        /// Suggestion the "after" look was meant to apply (repeatable)
        #[arg(short, long = "suggestion")]
        suggestions: Vec<String>,
    },
    /// Chat with the offline stylist
    Chat {
        /// Aesthetic to style for
        #[arg(short, long, default_value = "y2k")]
        aesthetic: String,
        /// Outfit image giving the stylist its score and colors
        #[arg(short, long)]
        image: Option<String>,
        /// Ask one question and exit
        message: Option<String>,
    },
    /// List the supported aesthetics
    Aesthetics,
}

#[derive(Args)]
struct StyleArgs {
    /// Aesthetic to rate against
    #[arg(short, long, default_value = "y2k")]
    aesthetic: String,
    /// Ask the remote model first (needs OPENAI_API_KEY)
    #[arg(long)]
    ai: bool,
    /// Print JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Score { image, style, features } => {
            let aesthetic = resolve_aesthetic(&style.aesthetic);
            let rater = build_rater(style.ai);
            let rating = rater.rate(&image, aesthetic).await;

            if style.json {
                println!("{}", serde_json::to_string_pretty(&rating)?);
            } else {
                print_rating(&rating, aesthetic);
                if features {
                    println!();
                    print_features(&rater.scorer().extract_features(&image));
                }
            }
        }
        Command::Compare { before, after, style, suggestions } => {
            let aesthetic = resolve_aesthetic(&style.aesthetic);
            let rater = build_rater(style.ai);
            let report = rater
                .evaluate_improvement(&before, &after, &suggestions, aesthetic)
                .await;

            if style.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_improvement(&report, aesthetic);
            }
        }
        Command::Chat { aesthetic, image, message } => {
            let aesthetic = resolve_aesthetic(&aesthetic);
            run_chat(aesthetic, image.as_deref(), message)?;
        }
        Command::Aesthetics => print_aesthetics(),
    }

    Ok(())
}

/// Parse an aesthetic label, warning when it falls back to y2k
fn resolve_aesthetic(label: &str) -> Aesthetic {
    Aesthetic::parse(label).unwrap_or_else(|| {
        tracing::warn!(label, "unknown aesthetic, using y2k");
        Aesthetic::from_label(label)
    })
}

fn build_rater(ai: bool) -> OutfitRater<OpenAiClient> {
    if !ai {
        return OutfitRater::heuristic();
    }

    match OpenAiClient::from_env() {
        Ok(client) => OutfitRater::with_model(client),
        Err(e) => {
            tracing::warn!(error = %e, "remote model unavailable, scoring offline");
            OutfitRater::heuristic()
        }
    }
}

fn run_chat(mut aesthetic: Aesthetic, image: Option<&str>, message: Option<String>) -> Result<()> {
    let stylist = Stylist::new();
    let scorer = StyleScorer::new();

    let context_for = |aesthetic: Aesthetic, user_message: String| match image {
        Some(image) => StylistContext {
            aesthetic,
            current_score: scorer.analyze(image, aesthetic).overall_score,
            dominant_colors: scorer.extract_features(image).dominant_colors,
            user_message,
        },
        None => StylistContext {
            aesthetic,
            current_score: NEUTRAL_SCORE,
            dominant_colors: Vec::new(),
            user_message,
        },
    };

    if let Some(message) = message {
        print_stylist_reply(&stylist.reply(&context_for(aesthetic, message)));
        return Ok(());
    }

    display_banner(aesthetic);

    let mut history = Vec::new();
    let mut last_reply: Option<StylistReply> = None;

    loop {
        let Some(input) = handle_input_with_history(&mut history)? else {
            break;
        };

        if input.is_empty() {
            continue;
        }

        let input_lower = input.to_lowercase();

        if input_lower == "exit" || input_lower == "quit" {
            println!("{}", "Stay stylish!".green());
            break;
        }

        if input_lower == "help" {
            print_help();
            continue;
        }

        if input_lower == "todo" {
            let reply = match &last_reply {
                Some(reply) => reply.clone(),
                None => stylist.reply(&context_for(aesthetic, String::new())),
            };
            println!("{}", "Your checklist:".bold());
            for item in &reply.actionable_items {
                println!("  {} {}", "□".cyan(), item);
            }
            continue;
        }

        if let Some(label) = input_lower.strip_prefix("aesthetic ") {
            aesthetic = resolve_aesthetic(label);
            println!("{} {}", "Now styling for".green(), aesthetic.display_name().bold());
            continue;
        }

        let reply = stylist.reply(&context_for(aesthetic, input));
        print_stylist_reply(&reply);
        last_reply = Some(reply);
    }

    Ok(())
}
