//! Command line argument parsing for the Quill CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Quill - fuzzy word matching and spelling suggestions
#[derive(Parser, Debug, Clone)]
#[command(name = "quill")]
#[command(about = "Fuzzy word matching and spelling suggestions against a word list")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Quill Contributors")]
#[command(long_about = None)]
pub struct QuillArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl QuillArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check whether words are spelled correctly
    Check(CheckArgs),

    /// Suggest corrections for a misspelled word
    Suggest(SuggestArgs),

    /// Spell check a passage of text
    #[command(name = "check-text")]
    CheckText(CheckTextArgs),

    /// Show word list statistics
    Stats(StatsArgs),
}

/// Arguments for checking words
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the word list file (one word per line)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Words to check
    #[arg(value_name = "WORD", required = true, num_args = 1..)]
    pub words: Vec<String>,
}

/// Arguments for suggesting corrections
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Path to the word list file (one word per line)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// The word to find corrections for
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum edit distance for a candidate to qualify
    #[arg(short, long, default_value = "2")]
    pub tolerance: usize,

    /// Maximum difference between candidate length and query length
    #[arg(long, default_value = "2")]
    pub length_tolerance: usize,

    /// Admit candidates shorter than the query
    #[arg(long)]
    pub allow_shorter: bool,

    /// Maximum number of suggestions to display
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for checking a passage of text
#[derive(Parser, Debug, Clone)]
pub struct CheckTextArgs {
    /// Path to the word list file (one word per line)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// The text to spell check
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Maximum edit distance for suggested corrections
    #[arg(short, long, default_value = "2")]
    pub tolerance: usize,

    /// Maximum difference between candidate length and query length
    #[arg(long, default_value = "2")]
    pub length_tolerance: usize,

    /// Maximum number of suggestions per misspelled word
    #[arg(short, long, default_value = "5")]
    pub limit: usize,
}

/// Arguments for word list statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the word list file (one word per line)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
