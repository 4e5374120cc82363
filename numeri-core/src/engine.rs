//! The engine front door: one configuration fetch, then pure computation.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::assessment::{CalculationError, assess, quick_estimate};
use crate::models::{
    DeductionInput, IncomeInput, QuickEstimate, TaxCalculationResult, TaxYearConfig,
};
use crate::provider::{ConfigProvider, ProviderError};

/// Stateless calculation engine over a configuration provider.
///
/// Holds no mutable state of its own: every call fetches the requested
/// year's configuration as a single scoped acquisition, runs the pure
/// assessment pipeline, and discards the snapshot. Concurrent calls need no
/// synchronization.
pub struct TaxEngine<P> {
    provider: P,
}

impl<P: ConfigProvider> TaxEngine<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Computes the full tax liability for one return.
    ///
    /// Either a complete, internally consistent [`TaxCalculationResult`] is
    /// returned, or no result at all.
    pub async fn calculate(
        &self,
        income: &IncomeInput,
        deductions: &DeductionInput,
        tax_year: &str,
    ) -> Result<TaxCalculationResult, CalculationError> {
        let config = self.provider.tax_year_config(tax_year).await?;
        debug!(tax_year, "acquired tax year configuration");

        let result = assess(&config, income, deductions)?;
        debug!(
            taxable_income = %result.taxable_income,
            total_tax = %result.total_tax,
            "assessment complete"
        );
        Ok(result)
    }

    /// Read-only passthrough for callers that render brackets and
    /// thresholds without performing a calculation.
    pub async fn get_config(&self, tax_year: &str) -> Result<TaxYearConfig, ProviderError> {
        self.provider.tax_year_config(tax_year).await
    }

    /// Quick liability estimate from a taxable income figure alone.
    pub async fn estimate(
        &self,
        taxable_income: Decimal,
        tax_year: &str,
    ) -> Result<QuickEstimate, CalculationError> {
        let config = self.provider.tax_year_config(tax_year).await?;
        quick_estimate(&config, taxable_income)
    }

    /// Tax year labels the underlying provider can serve.
    pub async fn tax_years(&self) -> Result<Vec<String>, ProviderError> {
        self.provider.list_tax_years().await
    }
}
