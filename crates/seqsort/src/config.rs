//! Application configuration from CLI flags and environment.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use seqsort_core::constants::{DEFAULT_COMPARER, DEFAULT_FORMULA};

/// SeqSort: two-term recurrence sequences and keyed bubble sort.
#[derive(Parser, Debug)]
#[command(name = "seqsort", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output (no truncation, timing and sort statistics).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only output the values).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Also write the rendered output to this file.
    #[arg(short, long, global = true)]
    pub output: Option<String>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a sequence where each term combines the previous two.
    Sequence(SequenceArgs),

    /// Sort integer rows in place with a comparer.
    Sort(SortArgs),

    /// Generate shell completion.
    Completion {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `seqsort sequence`.
#[derive(Args, Debug)]
pub struct SequenceArgs {
    /// Number of terms to generate.
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub count: i64,

    /// First seed (position 0).
    #[arg(short = 'a', long, allow_negative_numbers = true)]
    pub first: Option<String>,

    /// Second seed (position 1).
    #[arg(short = 'b', long, allow_negative_numbers = true)]
    pub second: Option<String>,

    /// Formula: add, sub, mul, or linear:P,Q (next = P*current + Q*previous).
    #[arg(short, long, default_value = DEFAULT_FORMULA, env = "SEQSORT_FORMULA")]
    pub formula: String,

    /// Use 64-bit checked arithmetic and fail on overflow.
    #[arg(long)]
    pub checked: bool,
}

/// Arguments for `seqsort sort`.
#[derive(Args, Debug)]
pub struct SortArgs {
    /// JSON file holding an array of integer rows, or "-" for stdin.
    #[arg(short, long, conflicts_with = "rows")]
    pub input: Option<String>,

    /// Inline rows: ';' between rows, ',' between values, "null" for a missing row.
    #[arg(short, long, allow_hyphen_values = true)]
    pub rows: Option<String>,

    /// Comparer: length-then-first, sum, max, or min; append ":desc" to invert.
    #[arg(long, default_value = DEFAULT_COMPARER, env = "SEQSORT_COMPARER")]
    pub by: String,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
