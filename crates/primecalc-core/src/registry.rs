//! Generator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::generator::{PrimeError, PrimeGenerator};
use crate::incremental::IncrementalTrialDivision;
use crate::naive::NaiveTrialDivision;

/// Factory trait for creating generators.
pub trait GeneratorFactory: Send + Sync {
    /// Get or create a generator by method name.
    fn get(&self, name: &str) -> Result<Arc<PrimeGenerator>, PrimeError>;

    /// List all available canonical method names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
///
/// Accepts numeric selectors (`0`, `1`) as well as method names. An
/// unrecognized selector is a bad-parameter error, never a silent empty
/// result.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<PrimeGenerator>>>,
}

/// Map a selector to its canonical method name.
fn canonical_name(name: &str) -> Option<&'static str> {
    match name {
        "0" | "naive" => Some("naive"),
        "1" | "fast" | "incremental" => Some("incremental"),
        _ => None,
    }
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_generator(name: &str) -> Result<(&'static str, Arc<PrimeGenerator>), PrimeError> {
        match canonical_name(name) {
            Some("naive") => {
                let core = Arc::new(NaiveTrialDivision::new());
                Ok(("naive", Arc::new(PrimeGenerator::new(core))))
            }
            Some("incremental") => {
                let core = Arc::new(IncrementalTrialDivision::new());
                Ok(("incremental", Arc::new(PrimeGenerator::new(core))))
            }
            _ => Err(PrimeError::Param(format!("unknown method: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<PrimeGenerator>, PrimeError> {
        // Check cache first, under the canonical name so aliases share one
        // instance.
        if let Some(canonical) = canonical_name(name) {
            if let Some(generator) = self.cache.read().get(canonical) {
                return Ok(Arc::clone(generator));
            }
        }

        let (canonical, generator) = Self::create_generator(name)?;
        tracing::debug!(method = canonical, "created generator");
        self.cache
            .write()
            .insert(canonical.to_string(), Arc::clone(&generator));
        Ok(generator)
    }

    fn available(&self) -> Vec<&str> {
        vec!["naive", "incremental"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_creates_naive() {
        let factory = DefaultFactory::new();
        let generator = factory.get("naive");
        assert!(generator.is_ok());
        assert_eq!(generator.unwrap().name(), "NaiveTrialDivision");
    }

    #[test]
    fn factory_creates_incremental() {
        let factory = DefaultFactory::new();
        let generator = factory.get("incremental");
        assert!(generator.is_ok());
        assert_eq!(generator.unwrap().name(), "IncrementalTrialDivision");
    }

    #[test]
    fn factory_numeric_selectors() {
        let factory = DefaultFactory::new();
        assert_eq!(factory.get("0").unwrap().name(), "NaiveTrialDivision");
        assert_eq!(factory.get("1").unwrap().name(), "IncrementalTrialDivision");
    }

    #[test]
    fn factory_fast_alias() {
        let factory = DefaultFactory::new();
        assert_eq!(factory.get("fast").unwrap().name(), "IncrementalTrialDivision");
    }

    #[test]
    fn factory_caches_across_aliases() {
        let factory = DefaultFactory::new();
        let by_number = factory.get("1").unwrap();
        let by_name = factory.get("incremental").unwrap();
        assert!(Arc::ptr_eq(&by_number, &by_name));
    }

    #[test]
    fn factory_unknown_name() {
        let factory = DefaultFactory::new();
        let result = factory.get("7");
        assert!(matches!(result, Err(PrimeError::Param(_))));
    }

    #[test]
    fn factory_available() {
        let factory = DefaultFactory::new();
        let available = factory.available();
        assert!(available.contains(&"naive"));
        assert!(available.contains(&"incremental"));
    }
}
