//! Leitner CLI
//!
//! Command-line front end for the Leitner bucket scheduler. Reads a deck
//! file, runs one scheduling operation and prints the result.

mod deck;

use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use leitner_core::{
    compute_progress_with, get_bucket_range, get_hint, is_bucket_due, is_prime_f64, practice,
    to_bucket_sets, update, AnswerDifficulty, ProgressConfig, SchedulerError,
};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

/// Leitner - flashcard bucket scheduler CLI
#[derive(Parser)]
#[command(name = "leitner")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "CLI for the Leitner bucket scheduler")]
#[command(long_about = "Leitner files flashcards into numbered buckets.\n\nBucket i is reviewed every 2^i days; wrong answers reset a card to bucket 0, hard answers demote it and easy answers promote it.")]
struct Cli {
    /// Deck file (JSON bucket assignment)
    #[arg(long, global = true, env = "LEITNER_DECK")]
    deck: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every bucket, empty ones included
    Buckets,

    /// List the cards due on a given day
    Practice {
        /// Practice day (zero or negative reviews every bucket)
        #[arg(long, allow_negative_numbers = true)]
        day: i64,
    },

    /// Show the lowest and highest occupied bucket
    Range,

    /// Show progress statistics
    Progress {
        /// Lowest bucket counted as mastered (default: highest occupied bucket)
        #[arg(long)]
        mastery_bucket: Option<usize>,
    },

    /// Record an answer and move the card
    Answer {
        /// Front of the answered card
        #[arg(long)]
        front: String,
        /// How it went: wrong, hard or easy
        #[arg(long)]
        difficulty: AnswerDifficulty,
        /// Where to write the updated deck (default: print it to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show the hint for a card
    Hint {
        /// Front of the card
        #[arg(long)]
        front: String,
    },

    /// Check whether a number is prime
    Prime {
        /// Number to test
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON
    let filter = log_filter(cli.verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();

    info!("Leitner CLI v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Prime { value } => run_prime(value, cli.json),
        command => {
            let Some(path) = cli.deck.as_deref() else {
                anyhow::bail!("No deck file given; pass --deck <PATH> or set LEITNER_DECK");
            };
            run_deck_command(command, path, cli.json)
        }
    }
}

/// Build the log filter: `RUST_LOG` when set, else `warn`; `-v` raises it
fn log_filter(verbose: u8, env: Option<&str>) -> EnvFilter {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level.as_str()));
    if verbose > 0 {
        filter.add_directive(level.into())
    } else {
        filter
    }
}

fn run_deck_command(command: Commands, path: &Path, json: bool) -> anyhow::Result<()> {
    match command {
        Commands::Buckets => run_buckets(path, json),
        Commands::Practice { day } => run_practice(path, day, json),
        Commands::Range => run_range(path, json),
        Commands::Progress { mastery_bucket } => run_progress(path, mastery_bucket, json),
        Commands::Answer {
            front,
            difficulty,
            output,
        } => run_answer(path, &front, difficulty, output, json),
        Commands::Hint { front } => run_hint(path, &front, json),
        Commands::Prime { value } => run_prime(value, json),
    }
}

/// Run buckets command
fn run_buckets(path: &Path, json: bool) -> anyhow::Result<()> {
    let sequence = to_bucket_sets(&deck::load(path)?);

    if json {
        println!("{}", serde_json::to_string_pretty(&sequence)?);
        return Ok(());
    }

    println!("{}", "=== Leitner Buckets ===".cyan().bold());
    println!();
    if sequence.is_empty() {
        println!("{}", "Deck is empty.".dimmed());
        return Ok(());
    }

    for (index, set) in sequence.iter().enumerate() {
        let header = format!("Bucket {} (every {} days)", index, cadence_label(index));
        println!("{} [{}]", header.white().bold(), set.len());
        if set.is_empty() {
            println!("  {}", "(empty)".dimmed());
        }
        for card in deck::sorted(set) {
            println!("  {} {}", ">".cyan(), card);
        }
    }

    Ok(())
}

/// Run practice command
fn run_practice(path: &Path, day: i64, json: bool) -> anyhow::Result<()> {
    let sequence = to_bucket_sets(&deck::load(path)?);
    let due = practice(&sequence, day);

    if json {
        println!("{}", serde_json::to_string_pretty(&deck::sorted(&due))?);
        return Ok(());
    }

    println!("{}", format!("=== Practice: day {} ===", day).cyan().bold());
    println!();

    let due_buckets: Vec<String> = (0..sequence.len())
        .filter(|&index| is_bucket_due(index, day))
        .map(|index| index.to_string())
        .collect();
    if due_buckets.is_empty() {
        println!("{}", "Deck is empty.".dimmed());
        return Ok(());
    }
    println!("{}: {}", "Due Buckets".white().bold(), due_buckets.join(", "));
    println!("{}: {}", "Cards Due".white().bold(), due.len());
    println!();

    for card in deck::sorted(&due) {
        println!("  {} {}", "?".yellow().bold(), card.front());
    }

    Ok(())
}

/// Run range command
fn run_range(path: &Path, json: bool) -> anyhow::Result<()> {
    let range = get_bucket_range(&to_bucket_sets(&deck::load(path)?));

    if json {
        println!("{}", serde_json::to_string_pretty(&range)?);
        return Ok(());
    }

    match range {
        Some(range) => {
            println!("{}: {}", "Min Bucket".white().bold(), range.min_bucket);
            println!("{}: {}", "Max Bucket".white().bold(), range.max_bucket);
            println!("{}", "(1-based bucket positions)".dimmed());
        }
        None => println!("{}", "No cards in any bucket.".dimmed()),
    }

    Ok(())
}

/// Run progress command
fn run_progress(path: &Path, mastery_bucket: Option<usize>, json: bool) -> anyhow::Result<()> {
    let assignment = deck::load(path)?;
    let config = ProgressConfig { mastery_bucket };
    let summary = compute_progress_with(&assignment, &[], &config);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", "=== Leitner Progress ===".cyan().bold());
    println!();
    println!("{}: {}", "Total Cards".white().bold(), summary.total_cards);
    match summary.mastery_bucket {
        Some(bucket) => println!("{}: {}", "Mastery Bucket".white().bold(), bucket),
        None => println!("{}: {}", "Mastery Bucket".white().bold(), "none".dimmed()),
    }
    println!("{}: {}", "Mastered Cards".white().bold(), summary.mastered_cards);
    println!("{}: {:.1}%", "Mastery".white().bold(), summary.mastery_ratio * 100.0);
    println!("{}: {:.2}", "Average Bucket".white().bold(), summary.average_bucket);

    if summary.total_cards > 0 {
        println!();
        println!("{}", "=== Bucket Distribution ===".yellow().bold());
        for (bucket, count) in summary.cards_per_bucket.iter().enumerate() {
            let mastered = summary.mastery_bucket.is_some_and(|floor| bucket >= floor);
            print_distribution_bar(&format!("Bucket {}", bucket), *count, summary.total_cards, mastered);
        }
    }

    Ok(())
}

/// Print a distribution bar
fn print_distribution_bar(label: &str, count: usize, total: usize, mastered: bool) {
    let percentage = if total > 0 {
        (count as f64 / total as f64) * 100.0
    } else {
        0.0
    };

    let bar_width: usize = 30;
    let filled = ((percentage / 100.0) * bar_width as f64) as usize;
    let empty = bar_width.saturating_sub(filled);

    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(empty));
    let colored_bar = if mastered { bar.green() } else { bar.yellow() };

    println!(
        "  {:12} [{:30}] {:>4} ({:>5.1}%)",
        label,
        colored_bar,
        count,
        percentage
    );
}

/// Run answer command
fn run_answer(
    path: &Path,
    front: &str,
    difficulty: AnswerDifficulty,
    output: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let mut assignment = deck::load(path)?;
    let card = deck::find_card(&assignment, front)?.clone();
    let transition = update(&mut assignment, &card, difficulty)?;

    let Some(output) = output else {
        // No output file: the updated deck itself is the result
        println!("{}", serde_json::to_string_pretty(&assignment)?);
        return Ok(());
    };

    deck::save(&output, &assignment)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&transition)?);
        return Ok(());
    }

    let movement = if transition.is_promotion() {
        "promoted".green()
    } else if transition.is_demotion() {
        "demoted".red()
    } else {
        "stayed".yellow()
    };
    println!(
        "{} '{}' {}: bucket {} -> {}",
        "OK".green().bold(),
        card.front(),
        movement,
        transition.from,
        transition.to
    );
    println!("Deck written to {}", output.display());

    Ok(())
}

/// Run hint command
fn run_hint(path: &Path, front: &str, json: bool) -> anyhow::Result<()> {
    let assignment = deck::load(path)?;
    let card = deck::find_card(&assignment, front)?;

    match get_hint(card) {
        Ok(hint) if json => println!("{}", serde_json::to_string(hint)?),
        Ok(hint) => println!("{}: {}", "Hint".white().bold(), hint),
        Err(SchedulerError::NoHint { .. }) if json => println!("null"),
        Err(SchedulerError::NoHint { .. }) => {
            println!("{}", format!("No hint stored for '{}'", front).dimmed())
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

/// Run prime command
fn run_prime(value: f64, json: bool) -> anyhow::Result<()> {
    let prime = is_prime_f64(value);

    if json {
        println!("{}", serde_json::json!({ "value": value, "prime": prime }));
    } else if prime {
        println!("{} is {}", value, "prime".green().bold());
    } else {
        println!("{} is {}", value, "not prime".red());
    }

    Ok(())
}

/// Review cadence of a bucket, in days
fn cadence_label(index: usize) -> String {
    match u32::try_from(index).ok().and_then(|i| 1u64.checked_shl(i)) {
        Some(days) => days.to_string(),
        None => format!("2^{}", index),
    }
}
