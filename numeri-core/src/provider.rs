use async_trait::async_trait;
use thiserror::Error;

use crate::models::TaxYearConfig;

/// Errors a configuration source can report. Retrying a failed fetch is the
/// provider's business; the engine never retries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("no configuration for tax year '{0}'")]
    UnknownTaxYear(String),

    #[error("configuration source unavailable: {0}")]
    Unavailable(String),
}

/// Source of per-year tax configuration.
///
/// The engine performs one scoped fetch at the start of a calculation and
/// does not retain the configuration afterwards, so implementations are free
/// to serve from memory, a database, or a remote store.
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Fetches the configuration for one tax year label, e.g. `"2024-25"`.
    async fn tax_year_config(&self, tax_year: &str) -> Result<TaxYearConfig, ProviderError>;

    /// Labels of the tax years this provider can serve.
    async fn list_tax_years(&self) -> Result<Vec<String>, ProviderError>;
}
