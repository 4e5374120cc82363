use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Small business income tax offset schedule. No offset accrues below
/// `threshold` of business income; the offset tapers to zero at `cutoff`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmallBusinessOffsetConfig {
    pub max_offset: Decimal,
    pub threshold: Decimal,
    pub cutoff: Decimal,
}
