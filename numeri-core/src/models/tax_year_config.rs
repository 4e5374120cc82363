use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lito_config::LitoConfig;
use super::medicare_levy::MedicareLevyConfig;
use super::small_business_offset_config::SmallBusinessOffsetConfig;
use super::tax_bracket::TaxBracket;

/// Everything the engine needs to know about one financial year.
///
/// Supplied by a configuration provider and treated as read-only for the
/// lifetime of a single calculation. Structural invariants are checked by
/// [`crate::calculations::config::validate_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    /// Year label, e.g. `"2024-25"`.
    pub tax_year: String,
    /// Marginal rate schedule, ordered by `min` ascending.
    pub brackets: Vec<TaxBracket>,
    pub medicare_levy: MedicareLevyConfig,
    pub lito: LitoConfig,
    pub small_business_offset: SmallBusinessOffsetConfig,
    /// Fixed-rate work from home deduction, dollars per hour.
    pub work_from_home_rate: Decimal,
    /// Instant asset write-off threshold, exposed for display only.
    pub instant_asset_writeoff: Decimal,
    /// Superannuation guarantee rate, e.g. `0.115`.
    pub super_guarantee_rate: Decimal,
}
