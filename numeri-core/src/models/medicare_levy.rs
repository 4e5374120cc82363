use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicareLevyConfig {
    /// Flat levy rate applied to the whole taxable income, e.g. `0.02`.
    pub rate: Decimal,
    /// No levy is payable at or below this taxable income.
    pub threshold: Decimal,
}
