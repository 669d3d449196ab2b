//! CLI result presenter.

use std::time::Duration;

use primecalc_orchestration::interfaces::{GenerationResult, ResultPresenter};

use crate::output::{format_duration, format_number, format_primes};

/// CLI result presenter.
pub struct CliResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CliResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CliResultPresenter {
    fn present_result(&self, algorithm: &str, bound: u32, primes: &[u32], duration: Duration) {
        if self.quiet {
            print!("{}", format_primes(primes));
            return;
        }

        if self.verbose {
            println!("Algorithm: {algorithm}");
            println!("Limit: {}", format_number(u64::from(bound)));
            println!("Duration: {}", format_duration(duration));
        }

        println!("Found {} primes:", primes.len());
        print!("{}", format_primes(primes));
    }

    fn present_comparison(&self, results: &[GenerationResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = if result.outcome.is_err() { "ERROR" } else { "OK" };
            println!(
                "  {:<28} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
