//! # primecalc-core
//!
//! Core library for the PrimeCalc-rs prime sequence calculator.
//! Implements naive and incremental trial-division algorithms.

pub mod constants;
pub mod generator;
pub mod incremental;
pub mod naive;
pub mod registry;

// Re-exports
pub use constants::{
    exit_codes, DEFAULT_CAPACITY, DEFAULT_LIMIT, MAX_CAPACITY, MAX_TABLE_BOUND, SMALL_PRIMES,
};
pub use generator::{PrimeError, PrimeGenerator, TrialDivision};
pub use registry::{DefaultFactory, GeneratorFactory};

use std::sync::Arc;

/// Collect every prime below `bound` using the incremental method.
///
/// This is a convenience function for simple library use. For method
/// selection, capacity cutoffs, and cross-validation, go through the
/// factory and the orchestration layer.
///
/// # Example
/// ```
/// assert_eq!(primecalc_core::primes_below(10), [2, 3, 5, 7]);
/// assert!(primecalc_core::primes_below(2).is_empty());
/// ```
#[must_use]
pub fn primes_below(bound: u32) -> Vec<u32> {
    use incremental::IncrementalTrialDivision;

    let generator = PrimeGenerator::new(Arc::new(IncrementalTrialDivision::new()));
    generator.generate(bound, usize::MAX)
}
