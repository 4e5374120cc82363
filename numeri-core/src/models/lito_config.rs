use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Low income tax offset schedule: the full `max_offset` applies up to
/// `threshold_1`, then tapers linearly to zero at `threshold_2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LitoConfig {
    pub max_offset: Decimal,
    pub threshold_1: Decimal,
    pub threshold_2: Decimal,
}
