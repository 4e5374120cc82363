use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Declared income figures for one return. A zero field means "not provided";
/// negative values are rejected by the input validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeInput {
    pub employment_income: Decimal,
    pub investment_income: Decimal,
    pub business_income: Decimal,
}

/// Declared deduction figures for one return, same non-negativity rule as
/// [`IncomeInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionInput {
    pub work_related_expenses: Decimal,
    pub work_from_home_deduction: Decimal,
    pub other_deductions: Decimal,
}
