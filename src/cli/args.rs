//! Command line argument parsing for the Wordscan CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Wordscan - tokenize text and run small sequence transforms
#[derive(Parser, Debug, Clone)]
#[command(name = "wordscan")]
#[command(about = "Tokenize text and run small sequence transforms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Wordscan Contributors")]
#[command(long_about = None)]
pub struct WordscanArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
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

impl WordscanArgs {
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

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Split text into words and report the word count
    Tokenize(TokenizeArgs),

    /// Select the even numbers from a list
    Evens(EvensArgs),

    /// Convert Celsius temperatures to Fahrenheit
    Temps(TempsArgs),

    /// Summarize a student grade record
    Grades(GradesArgs),
}

/// Arguments for tokenizing text
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text to tokenize
    #[arg(
        value_name = "TEXT",
        default_value = "Javascript es el lenguaje del futuro"
    )]
    pub text: String,
}

/// Approach used to select even numbers
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvensMethod {
    /// Explicit index loop
    Loop,
    /// Iterator filter combinator
    Filter,
}

/// Arguments for even-number selection
#[derive(Parser, Debug, Clone)]
pub struct EvensArgs {
    /// Numbers to filter
    #[arg(
        value_name = "NUMBERS",
        num_args = 0..,
        allow_negative_numbers = true,
        default_values_t = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 20, 23, 28, 30]
    )]
    pub numbers: Vec<i64>,

    /// Selection approach
    #[arg(short, long, default_value = "filter")]
    pub method: EvensMethod,
}

/// Arguments for temperature conversion
#[derive(Parser, Debug, Clone)]
pub struct TempsArgs {
    /// Temperatures in Celsius
    #[arg(
        value_name = "CELSIUS",
        num_args = 0..,
        allow_negative_numbers = true,
        default_values_t = vec![0.0, 10.0, 20.0, 25.0, 30.0, 35.0, 40.0, 100.0]
    )]
    pub celsius: Vec<f64>,
}

/// Arguments for grade summaries
#[derive(Parser, Debug, Clone)]
pub struct GradesArgs {
    /// Student record as inline JSON (defaults to the built-in sample record)
    #[arg(short, long, value_name = "JSON")]
    pub student: Option<String>,
}
