//! Core orchestration: timed execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use primecalc_core::{PrimeError, PrimeGenerator};

use crate::interfaces::GenerationResult;

/// Execute a generation run with each given generator, in order.
///
/// The kernel is single-threaded and synchronous by contract, so runs are
/// sequential; each gets its own destination buffer and wall-clock timing.
pub fn execute_generations(
    generators: &[Arc<PrimeGenerator>],
    bound: u32,
    capacity: usize,
) -> Vec<GenerationResult> {
    generators
        .iter()
        .map(|generator| {
            let start = Instant::now();
            let outcome = run_single(generator, bound, capacity);
            let duration = start.elapsed();
            debug!(
                algorithm = generator.name(),
                bound,
                capacity,
                ?duration,
                "generation finished"
            );
            GenerationResult {
                algorithm: generator.name().to_string(),
                outcome,
                duration,
            }
        })
        .collect()
}

fn run_single(
    generator: &PrimeGenerator,
    bound: u32,
    capacity: usize,
) -> Result<Vec<u32>, PrimeError> {
    // The destination is reserved up front, so an impossible capacity
    // request surfaces as a reported error instead of an allocator abort.
    let mut primes = Vec::new();
    primes
        .try_reserve_exact(capacity)
        .map_err(|_| PrimeError::Allocation(capacity))?;
    generator.generate_into(bound, capacity, &mut primes);
    Ok(primes)
}

/// Analyze comparison results for mismatches.
///
/// Every successful run must have produced the identical sequence; the
/// incremental method is a performance optimization, not a behavioral
/// variant.
pub fn analyze_comparison_results(results: &[GenerationResult]) -> Result<(), PrimeError> {
    let mut sequences = results
        .iter()
        .filter_map(|r| r.primes().map(|primes| (r.algorithm.as_str(), primes)));

    let Some((first_algorithm, first)) = sequences.next() else {
        return Err(PrimeError::Param("no successful generation to compare".into()));
    };

    for (algorithm, primes) in sequences {
        if primes != first {
            debug!(first_algorithm, algorithm, "sequences diverge");
            return Err(PrimeError::Mismatch);
        }
    }
    Ok(())
}
