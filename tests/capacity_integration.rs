//! Integration test for the allocation boundary.
//!
//! The destination buffer is the caller's concern; orchestration reserves
//! it up front so an impossible capacity request is a reported error.

use primecalc_core::{DefaultFactory, GeneratorFactory, PrimeError};
use primecalc_orchestration::orchestrator::execute_generations;

#[test]
fn policy_ceiling_capacity_is_reservable() {
    let factory = DefaultFactory::new();
    let generators = vec![factory.get("incremental").unwrap()];

    // The policy ceiling (1M entries, 4 MB of u32) must succeed.
    let results = execute_generations(&generators, 10, primecalc_core::MAX_CAPACITY);
    assert_eq!(results[0].primes(), Some([2, 3, 5, 7].as_slice()));
}

#[test]
fn impossible_capacity_reports_allocation_failure() {
    let factory = DefaultFactory::new();
    let generators = vec![factory.get("naive").unwrap()];

    let results = execute_generations(&generators, 10, usize::MAX);
    assert!(matches!(
        results[0].outcome,
        Err(PrimeError::Allocation(_))
    ));
}
