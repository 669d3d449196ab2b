//! Generator selection logic.

use std::sync::Arc;

use primecalc_core::{GeneratorFactory, PrimeError, PrimeGenerator};

/// Get generators to run based on the method selector.
///
/// `all` (or `both`) selects every available method for cross-validated
/// execution; anything else is resolved through the factory.
pub fn get_generators_to_run(
    method: &str,
    factory: &dyn GeneratorFactory,
) -> Result<Vec<Arc<PrimeGenerator>>, PrimeError> {
    match method {
        "all" | "both" => factory.available().into_iter().map(|name| factory.get(name)).collect(),
        name => {
            let generator = factory.get(name)?;
            Ok(vec![generator])
        }
    }
}
