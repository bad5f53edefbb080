//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};

use fibprime_core::{Bound, DEFAULT_BOUND};

/// fibprime — primes, Fibonacci numbers and Fibonacci primes below a bound.
#[derive(Parser, Debug)]
#[command(name = "fibprime", version, about)]
pub struct AppConfig {
    /// Exclusive upper bound. Non-positive bounds give empty results.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_BOUND,
        env = "FIBPRIME_N",
        allow_negative_numbers = true
    )]
    pub n: i64,

    /// Prime generator to use: trial, sqrt, sieve, or all.
    #[arg(long, default_value = "sqrt")]
    pub algo: String,

    /// Which sequence to print.
    #[arg(long, value_enum, default_value_t = SequenceKind::Intersection)]
    pub sequence: SequenceKind,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Verbose output (no truncation, info-level logging).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show set sizes and timing.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the values).
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write the result to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Sequence selected with `--sequence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SequenceKind {
    /// Fibonacci primes.
    Intersection,
    /// Primes below the bound.
    Primes,
    /// Fibonacci numbers below the bound.
    Fibonacci,
}

impl SequenceKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Intersection => "fibonacci primes",
            Self::Primes => "primes",
            Self::Fibonacci => "fibonacci",
        }
    }
}

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The bound as passed to the core library.
    #[must_use]
    pub fn bound(&self) -> Bound {
        Bound::new(self.n)
    }

    /// Default tracing directive for this configuration.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        }
    }
}
