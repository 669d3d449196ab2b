//! Application configuration from CLI flags and environment.

use clap::Parser;

use primecalc_core::constants::{DEFAULT_CAPACITY, DEFAULT_LIMIT};

/// PrimeCalc-rs — trial-division prime sequence calculator.
#[derive(Parser, Debug)]
#[command(name = "primecalc", version, about)]
pub struct AppConfig {
    /// Exclusive upper bound for the prime search.
    #[arg(short = 'l', long = "limit", default_value_t = DEFAULT_LIMIT, env = "PRIMECALC_LIMIT")]
    pub limit: u32,

    /// Maximum number of primes to collect (1 to 1000000).
    #[arg(
        short = 'n',
        long = "num-primes",
        default_value_t = DEFAULT_CAPACITY,
        env = "PRIMECALC_NUM_PRIMES"
    )]
    pub num_primes: usize,

    /// Method to use: 0/naive, 1/fast/incremental, or all.
    #[arg(short, long, default_value = "0")]
    pub method: String,

    /// Verbose output (algorithm, limit, duration per run).
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (print only the primes).
    #[arg(short, long)]
    pub quiet: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
