//! In-memory configuration provider.

use std::collections::BTreeMap;

use async_trait::async_trait;
use numeri_core::calculations::validate_config;
use numeri_core::{ConfigProvider, ConfigurationError, ProviderError, TaxYearConfig};

use crate::builtin::tax_year_2024_25;

/// Serves tax year configurations from an in-memory map.
///
/// Every configuration is structurally validated when it is inserted, so the
/// provider never hands out a schedule that would fail mid-calculation.
#[derive(Debug, Default)]
pub struct StaticProvider {
    years: BTreeMap<String, TaxYearConfig>,
}

impl StaticProvider {
    /// An empty provider with no years registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider seeded with every built-in year.
    pub fn with_builtin_years() -> Self {
        let mut provider = Self::new();
        // A builtin table that fails validation is a programming error.
        let inserted = provider.insert(tax_year_2024_25());
        debug_assert!(inserted.is_ok(), "builtin table rejected: {inserted:?}");
        provider
    }

    /// Registers (or replaces) one tax year after validating it.
    pub fn insert(&mut self, config: TaxYearConfig) -> Result<(), ConfigurationError> {
        validate_config(&config)?;
        self.years.insert(config.tax_year.clone(), config);
        Ok(())
    }

    /// Looks a year up without going through the async trait.
    pub fn get(&self, tax_year: &str) -> Option<&TaxYearConfig> {
        self.years.get(tax_year)
    }
}

#[async_trait]
impl ConfigProvider for StaticProvider {
    async fn tax_year_config(&self, tax_year: &str) -> Result<TaxYearConfig, ProviderError> {
        self.years
            .get(tax_year)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownTaxYear(tax_year.to_string()))
    }

    async fn list_tax_years(&self) -> Result<Vec<String>, ProviderError> {
        Ok(self.years.keys().cloned().collect())
    }
}
