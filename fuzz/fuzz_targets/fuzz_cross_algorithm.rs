#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

use primecalc_core::generator::PrimeGenerator;
use primecalc_core::incremental::IncrementalTrialDivision;
use primecalc_core::naive::NaiveTrialDivision;

fuzz_target!(|data: &[u8]| {
    if data.len() < 6 {
        return;
    }
    // First 4 bytes select the bound (capped for speed), next 2 the capacity
    let bound = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) % 5_000;
    let capacity = usize::from(u16::from_le_bytes([data[4], data[5]])) % 1_000;

    let naive = PrimeGenerator::new(Arc::new(NaiveTrialDivision::new()));
    let incremental = PrimeGenerator::new(Arc::new(IncrementalTrialDivision::new()));

    let naive_result = naive.generate(bound, capacity);
    let incremental_result = incremental.generate(bound, capacity);

    assert_eq!(
        naive_result, incremental_result,
        "naive != incremental at bound={bound} capacity={capacity}"
    );
});
