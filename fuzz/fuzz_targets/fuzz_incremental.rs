#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

use primecalc_core::generator::PrimeGenerator;
use primecalc_core::incremental::IncrementalTrialDivision;

fuzz_target!(|data: &[u8]| {
    if data.len() < 6 {
        return;
    }
    let bound = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) % 50_000;
    let capacity = usize::from(u16::from_le_bytes([data[4], data[5]]));

    let generator = PrimeGenerator::new(Arc::new(IncrementalTrialDivision::new()));
    let primes = generator.generate(bound, capacity);

    // Structural invariants: ascending, in range, capacity respected
    assert!(primes.len() <= capacity);
    for window in primes.windows(2) {
        assert!(window[0] < window[1], "sequence not ascending");
    }
    if let Some(&last) = primes.last() {
        assert!(last < bound, "element {last} >= bound {bound}");
    }
});
