//! Generator trait and the `PrimeGenerator` decorator.
//!
//! `TrialDivision` is the internal trait implemented by algorithms.
//! `PrimeGenerator` is a decorator that adds the edge policy (empty result
//! for degenerate inputs) and the small-bound table fast path.

use std::sync::Arc;

use crate::constants::{MAX_TABLE_BOUND, SMALL_PRIMES};

/// Error type for prime generation.
///
/// The kernel itself never fails for well-formed numeric input; these
/// variants are produced at the selection, allocation, and cross-validation
/// boundaries around it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PrimeError {
    /// Bad parameter (unknown method, out-of-policy capacity).
    #[error("bad parameter: {0}")]
    Param(String),

    /// The result buffer could not be reserved.
    #[error("could not reserve space for {0} primes")]
    Allocation(usize),

    /// Methods produced differing sequences during cross-validation.
    #[error("result mismatch between methods")]
    Mismatch,
}

/// Internal trait for trial-division algorithm implementations.
/// Wrapped by `PrimeGenerator`, which screens edge inputs.
pub trait TrialDivision: Send + Sync {
    /// Append every prime below `bound` to `primes`, in ascending order,
    /// stopping once `capacity` primes have been collected.
    ///
    /// Implementations may assume `primes` starts empty, `bound >= 2`,
    /// and `capacity >= 1`.
    fn find_primes(&self, bound: u32, capacity: usize, primes: &mut Vec<u32>);

    /// Get the display name of this algorithm.
    fn name(&self) -> &'static str;
}

/// Decorator that wraps a `TrialDivision` algorithm with the edge policy
/// and the small-bound fast path.
pub struct PrimeGenerator {
    inner: Arc<dyn TrialDivision>,
}

impl PrimeGenerator {
    /// Create a new `PrimeGenerator` wrapping the given algorithm.
    #[must_use]
    pub fn new(inner: Arc<dyn TrialDivision>) -> Self {
        Self { inner }
    }

    /// Get the name of the wrapped algorithm.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    /// Generate the primes below `bound`, at most `capacity` of them.
    ///
    /// A capacity of 0 or a bound below 2 yields an empty list; that is a
    /// defined result, not an error. A result of exactly `capacity` primes
    /// means more primes may exist below the bound.
    #[must_use]
    pub fn generate(&self, bound: u32, capacity: usize) -> Vec<u32> {
        let mut primes = Vec::new();
        self.generate_into(bound, capacity, &mut primes);
        primes
    }

    /// Generate into a caller-owned buffer, replacing its contents.
    ///
    /// Sizing the buffer is the caller's concern; `capacity` is enforced as
    /// a logical cutoff, never as a buffer limit.
    pub fn generate_into(&self, bound: u32, capacity: usize, primes: &mut Vec<u32>) {
        primes.clear();
        if capacity == 0 || bound < 2 {
            return;
        }
        if bound <= MAX_TABLE_BOUND {
            Self::generate_small(bound, capacity, primes);
            return;
        }
        self.inner.find_primes(bound, capacity, primes);
    }

    /// Fast path for small bounds using the precomputed table.
    fn generate_small(bound: u32, capacity: usize, primes: &mut Vec<u32>) {
        primes.extend(
            SMALL_PRIMES
                .iter()
                .copied()
                .filter(|&p| p < bound)
                .take(capacity),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::incremental::IncrementalTrialDivision;
    use crate::naive::NaiveTrialDivision;

    fn generator(inner: Arc<dyn TrialDivision>) -> PrimeGenerator {
        PrimeGenerator::new(inner)
    }

    #[test]
    fn zero_capacity_is_empty() {
        let g = generator(Arc::new(NaiveTrialDivision::new()));
        assert!(g.generate(100_000, 0).is_empty());
    }

    #[test]
    fn bound_below_two_is_empty() {
        let g = generator(Arc::new(IncrementalTrialDivision::new()));
        assert!(g.generate(0, 10).is_empty());
        assert!(g.generate(1, 10).is_empty());
        assert!(g.generate(2, 10).is_empty());
    }

    #[test]
    fn small_bound_served_from_table() {
        let g = generator(Arc::new(NaiveTrialDivision::new()));
        assert_eq!(g.generate(20, 100), [2, 3, 5, 7, 11, 13, 17, 19]);
        assert_eq!(g.generate(20, 3), [2, 3, 5]);
        assert_eq!(g.generate(3, 10), [2]);
    }

    #[test]
    fn table_agrees_with_algorithms() {
        let naive = generator(Arc::new(NaiveTrialDivision::new()));
        let incremental = generator(Arc::new(IncrementalTrialDivision::new()));
        for bound in [2u32, 3, 10, 50, 97, 100] {
            let mut from_algo = Vec::new();
            NaiveTrialDivision::new().find_primes(bound, 1000, &mut from_algo);
            assert_eq!(naive.generate(bound, 1000), from_algo, "bound={bound}");
            assert_eq!(incremental.generate(bound, 1000), from_algo, "bound={bound}");
        }
    }

    #[test]
    fn generate_into_replaces_contents() {
        let g = generator(Arc::new(IncrementalTrialDivision::new()));
        let mut buf = vec![42, 43, 44];
        g.generate_into(10, 100, &mut buf);
        assert_eq!(buf, [2, 3, 5, 7]);
        g.generate_into(1, 100, &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn prime_error_display() {
        let err = PrimeError::Param("num-primes out of range".into());
        assert_eq!(err.to_string(), "bad parameter: num-primes out of range");

        let err = PrimeError::Allocation(1_000_000);
        assert_eq!(err.to_string(), "could not reserve space for 1000000 primes");

        let err = PrimeError::Mismatch;
        assert_eq!(err.to_string(), "result mismatch between methods");
    }
}
