//! Name-keyed catalog of generators and randomness tests.
//!
//! The catalog is an explicit value built once (usually with
//! [`AlgorithmCatalog::standard`]) and passed by reference to whatever needs
//! lookup. Entries keep their registration order so listings are stable.
//!
//! ## Example
//!
//! ```
//! use prng_models::catalog::AlgorithmCatalog;
//!
//! let catalog = AlgorithmCatalog::standard();
//!
//! let caps = catalog.capabilities("middle-product").unwrap();
//! assert_eq!(caps.required_seeds, 2);
//!
//! assert_eq!(
//!     catalog.test_names().collect::<Vec<_>>(),
//!     vec!["mean", "variance", "uniformity-chi2"]
//! );
//! assert!(catalog.create_test("runs").is_err());
//! ```

use prng_core::traits::GeneratorCapabilities;
use prng_core::types::ConfigError;

use crate::generators::{DigitGenerator, GeneratorKind};
use crate::randomness::{RandomnessTestEnum, TestKind};

/// Catalog record for a generator.
#[derive(Clone, Copy, Debug)]
pub struct GeneratorEntry {
    /// Lookup key.
    pub name: &'static str,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Inputs the generator needs.
    pub capabilities: GeneratorCapabilities,
    /// Produces a fresh instance.
    pub factory: fn() -> DigitGenerator,
}

/// Catalog record for a randomness test.
#[derive(Clone, Copy, Debug)]
pub struct TestEntry {
    /// Lookup key.
    pub name: &'static str,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Produces a fresh instance.
    pub factory: fn() -> RandomnessTestEnum,
}

/// Mapping from names to generator and test factories.
#[derive(Clone, Debug, Default)]
pub struct AlgorithmCatalog {
    generators: Vec<GeneratorEntry>,
    tests: Vec<TestEntry>,
}

impl AlgorithmCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the three generators and three tests.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog
            .register_generator(GeneratorEntry {
                name: GeneratorKind::MidSquare.name(),
                display_name: GeneratorKind::MidSquare.display_name(),
                capabilities: GeneratorKind::MidSquare.capabilities(),
                factory: DigitGenerator::mid_square,
            })
            .register_generator(GeneratorEntry {
                name: GeneratorKind::ConstantMultiplier.name(),
                display_name: GeneratorKind::ConstantMultiplier.display_name(),
                capabilities: GeneratorKind::ConstantMultiplier.capabilities(),
                factory: DigitGenerator::constant_multiplier,
            })
            .register_generator(GeneratorEntry {
                name: GeneratorKind::MiddleProduct.name(),
                display_name: GeneratorKind::MiddleProduct.display_name(),
                capabilities: GeneratorKind::MiddleProduct.capabilities(),
                factory: DigitGenerator::middle_product,
            })
            .register_test(TestEntry {
                name: TestKind::Mean.name(),
                display_name: TestKind::Mean.display_name(),
                factory: || RandomnessTestEnum::new(TestKind::Mean),
            })
            .register_test(TestEntry {
                name: TestKind::Variance.name(),
                display_name: TestKind::Variance.display_name(),
                factory: || RandomnessTestEnum::new(TestKind::Variance),
            })
            .register_test(TestEntry {
                name: TestKind::Uniformity.name(),
                display_name: TestKind::Uniformity.display_name(),
                factory: || RandomnessTestEnum::new(TestKind::Uniformity),
            });
        catalog
    }

    /// Add or replace a generator entry.
    ///
    /// Replacing keeps the original position.
    pub fn register_generator(&mut self, entry: GeneratorEntry) -> &mut Self {
        match self.generators.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.generators.push(entry),
        }
        self
    }

    /// Add or replace a test entry.
    pub fn register_test(&mut self, entry: TestEntry) -> &mut Self {
        match self.tests.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.tests.push(entry),
        }
        self
    }

    /// Look up a generator entry.
    ///
    /// # Errors
    ///
    /// `ConfigError::UnknownGenerator` if no entry has this name.
    pub fn generator(&self, name: &str) -> Result<&GeneratorEntry, ConfigError> {
        self.generators
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ConfigError::UnknownGenerator(name.to_string()))
    }

    /// Look up a test entry.
    ///
    /// # Errors
    ///
    /// `ConfigError::UnknownTest` if no entry has this name.
    pub fn test(&self, name: &str) -> Result<&TestEntry, ConfigError> {
        self.tests
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ConfigError::UnknownTest(name.to_string()))
    }

    /// Input requirements of a generator.
    pub fn capabilities(&self, name: &str) -> Result<GeneratorCapabilities, ConfigError> {
        self.generator(name).map(|e| e.capabilities)
    }

    /// Fresh generator instance.
    pub fn create_generator(&self, name: &str) -> Result<DigitGenerator, ConfigError> {
        self.generator(name).map(|e| (e.factory)())
    }

    /// Fresh test instance.
    pub fn create_test(&self, name: &str) -> Result<RandomnessTestEnum, ConfigError> {
        self.test(name).map(|e| (e.factory)())
    }

    /// All generator entries in registration order.
    pub fn generators(&self) -> &[GeneratorEntry] {
        &self.generators
    }

    /// All test entries in registration order.
    pub fn tests(&self) -> &[TestEntry] {
        &self.tests
    }

    /// Generator names in registration order.
    pub fn generator_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.generators.iter().map(|e| e.name)
    }

    /// Test names in registration order.
    pub fn test_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tests.iter().map(|e| e.name)
    }
}
