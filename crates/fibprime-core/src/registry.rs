//! Generator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::FibPrimeError;
use crate::generator::{PrimeGenerator, SieveOfEratosthenes, TrialDivision};

/// Factory trait for looking up prime generators by name.
pub trait GeneratorFactory: Send + Sync {
    /// Get or create a generator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn PrimeGenerator>, FibPrimeError>;

    /// List all available generator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn PrimeGenerator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_generator(name: &str) -> Result<Arc<dyn PrimeGenerator>, FibPrimeError> {
        match name {
            "trial" => Ok(Arc::new(TrialDivision::exhaustive())),
            "sqrt" => Ok(Arc::new(TrialDivision::bounded())),
            "sieve" => Ok(Arc::new(SieveOfEratosthenes::new())),
            _ => Err(FibPrimeError::Config(format!("unknown generator: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn PrimeGenerator>, FibPrimeError> {
        if let Some(gen) = self.cache.read().get(name) {
            return Ok(Arc::clone(gen));
        }

        let gen = Self::create_generator(name)?;
        tracing::debug!(name, generator = gen.name(), "created prime generator");
        self.cache.write().insert(name.to_string(), Arc::clone(&gen));
        Ok(gen)
    }

    fn available(&self) -> Vec<&str> {
        vec!["trial", "sqrt", "sieve"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_generators() {
        let factory = DefaultFactory::new();
        assert_eq!(factory.get("trial").unwrap().name(), "TrialDivision");
        assert_eq!(factory.get("sqrt").unwrap().name(), "BoundedTrialDivision");
        assert_eq!(factory.get("sieve").unwrap().name(), "SieveOfEratosthenes");
    }

    #[test]
    fn unknown_generator_is_config_error() {
        let factory = DefaultFactory::new();
        let err = factory.get("wheel").err().unwrap();
        assert_eq!(err, FibPrimeError::Config("unknown generator: wheel".into()));
    }

    #[test]
    fn cached_instance_is_reused() {
        let factory = DefaultFactory::new();
        let first = factory.get("sieve").unwrap();
        let second = factory.get("sieve").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn every_available_name_resolves() {
        let factory = DefaultFactory::new();
        for name in factory.available() {
            assert!(factory.get(name).is_ok(), "{name}");
        }
    }
}
