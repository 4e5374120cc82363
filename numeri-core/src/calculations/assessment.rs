//! Result aggregation: the single place where component outputs are
//! combined, the non-refundable offset rule is enforced, and figures are
//! rounded for reporting.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::{floor_at_zero, round_to_cents};
use crate::calculations::config::{ConfigurationError, validate_config};
use crate::calculations::income_tax::income_tax_for;
use crate::calculations::medicare::medicare_levy_for;
use crate::calculations::offsets::{low_income_tax_offset_for, small_business_offset_for};
use crate::calculations::validation::{InvalidInputError, validate_deductions, validate_income};
use crate::models::{
    DeductionInput, IncomeInput, QuickEstimate, TaxCalculationResult, TaxYearConfig,
};
use crate::provider::ProviderError;

/// Any failure an assessment can end with. Wraps the component errors at the
/// aggregation boundary; the engine returns nothing else.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    #[error(transparent)]
    Input(#[from] InvalidInputError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("could not load tax year configuration: {0}")]
    Provider(#[from] ProviderError),
}

/// Runs a complete assessment of one return against one tax year
/// configuration.
///
/// Pure function of its arguments: the same inputs and configuration always
/// produce a bit-identical result, and a failure leaves nothing partially
/// computed. Component figures stay unrounded until they are written into
/// the result, where each reported field is rounded to cents.
///
/// Offsets are non-refundable credits: they can reduce the total tax to
/// zero but never below it.
///
/// # Errors
///
/// - [`CalculationError::Input`] for a negative income or deduction figure,
///   naming the field.
/// - [`CalculationError::Configuration`] when the configuration violates a
///   structural invariant.
pub fn assess(
    config: &TaxYearConfig,
    income: &IncomeInput,
    deductions: &DeductionInput,
) -> Result<TaxCalculationResult, CalculationError> {
    validate_income(income)?;
    validate_deductions(deductions)?;
    validate_config(config)?;

    let total_income =
        income.employment_income + income.investment_income + income.business_income;
    let total_deductions = deductions.work_related_expenses
        + deductions.work_from_home_deduction
        + deductions.other_deductions;
    let taxable_income = floor_at_zero(total_income - total_deductions);

    let income_tax = income_tax_for(&config.brackets, taxable_income)?;
    let medicare_levy = medicare_levy_for(&config.medicare_levy, taxable_income);
    let low_income_tax_offset = low_income_tax_offset_for(&config.lito, taxable_income);
    let small_business_offset = small_business_offset_for(
        &config.small_business_offset,
        income.business_income,
        taxable_income,
        income_tax,
    );

    let total_tax_before_offsets = income_tax + medicare_levy;
    let total_offsets = low_income_tax_offset + small_business_offset;
    let total_tax = floor_at_zero(total_tax_before_offsets - total_offsets);

    Ok(TaxCalculationResult {
        total_income: round_to_cents(total_income),
        total_deductions: round_to_cents(total_deductions),
        taxable_income: round_to_cents(taxable_income),
        income_tax: round_to_cents(income_tax),
        medicare_levy: round_to_cents(medicare_levy),
        low_income_tax_offset: round_to_cents(low_income_tax_offset),
        small_business_offset: round_to_cents(small_business_offset),
        total_tax_before_offsets: round_to_cents(total_tax_before_offsets),
        total_offsets: round_to_cents(total_offsets),
        total_tax: round_to_cents(total_tax),
    })
}

/// Abbreviated assessment starting from a taxable income figure.
///
/// Covers the quick-estimate path: income tax, medicare levy, and the low
/// income tax offset only, since the income split needed for the small
/// business offset is not available here.
pub fn quick_estimate(
    config: &TaxYearConfig,
    taxable_income: Decimal,
) -> Result<QuickEstimate, CalculationError> {
    if taxable_income < Decimal::ZERO {
        return Err(InvalidInputError::Negative {
            field: "taxable_income",
            value: taxable_income,
        }
        .into());
    }
    validate_config(config)?;

    let income_tax = income_tax_for(&config.brackets, taxable_income)?;
    let medicare_levy = medicare_levy_for(&config.medicare_levy, taxable_income);
    let low_income_tax_offset = low_income_tax_offset_for(&config.lito, taxable_income);

    let estimated_total_tax =
        floor_at_zero(income_tax + medicare_levy - low_income_tax_offset);

    Ok(QuickEstimate {
        taxable_income: round_to_cents(taxable_income),
        income_tax: round_to_cents(income_tax),
        medicare_levy: round_to_cents(medicare_levy),
        low_income_tax_offset: round_to_cents(low_income_tax_offset),
        estimated_total_tax: round_to_cents(estimated_total_tax),
        take_home_income: round_to_cents(taxable_income - estimated_total_tax),
    })
}
