//! Orchestration interfaces.

use std::time::Duration;

use primecalc_core::PrimeError;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present one generation result.
    fn present_result(&self, algorithm: &str, bound: u32, primes: &[u32], duration: Duration);

    /// Present a comparison of several results.
    fn present_comparison(&self, results: &[GenerationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The generated sequence or a structured error.
    pub outcome: Result<Vec<u32>, PrimeError>,
    /// Generation duration.
    pub duration: Duration,
}

impl GenerationResult {
    /// The generated sequence, if the run succeeded.
    #[must_use]
    pub fn primes(&self) -> Option<&[u32]> {
        self.outcome.as_ref().ok().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_result_accessors() {
        let result = GenerationResult {
            algorithm: "NaiveTrialDivision".into(),
            outcome: Ok(vec![2, 3, 5]),
            duration: Duration::from_millis(1),
        };
        assert_eq!(result.primes(), Some([2, 3, 5].as_slice()));

        let failed = GenerationResult {
            algorithm: "IncrementalTrialDivision".into(),
            outcome: Err(PrimeError::Allocation(usize::MAX)),
            duration: Duration::ZERO,
        };
        assert!(failed.primes().is_none());
    }
}
