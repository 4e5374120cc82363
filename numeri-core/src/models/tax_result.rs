use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fully reconciled outcome of one assessment. Produced fresh per call; every
/// field is rounded to cents at the point it is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    pub total_income: Decimal,
    pub total_deductions: Decimal,
    pub taxable_income: Decimal,
    pub income_tax: Decimal,
    pub medicare_levy: Decimal,
    pub low_income_tax_offset: Decimal,
    pub small_business_offset: Decimal,
    pub total_tax_before_offsets: Decimal,
    pub total_offsets: Decimal,
    pub total_tax: Decimal,
}

/// Abbreviated result for the quick-estimate path, which starts from a
/// taxable income figure instead of itemised income and deductions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickEstimate {
    pub taxable_income: Decimal,
    pub income_tax: Decimal,
    pub medicare_levy: Decimal,
    pub low_income_tax_offset: Decimal,
    pub estimated_total_tax: Decimal,
    pub take_home_income: Decimal,
}
