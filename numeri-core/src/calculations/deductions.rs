//! Stand-alone deduction and contribution helpers driven by per-year rates.
//!
//! These do not feed the assessment pipeline directly; callers use them to
//! derive figures (a work from home deduction, a super guarantee amount)
//! that they then declare as inputs.

use rust_decimal::Decimal;

use crate::calculations::common::round_to_cents;
use crate::calculations::validation::InvalidInputError;
use crate::models::TaxYearConfig;

/// Calculates the fixed-rate work from home deduction for `hours_worked`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// # use numeri_core::{LitoConfig, MedicareLevyConfig, SmallBusinessOffsetConfig,
/// #     TaxBracket, TaxYearConfig};
/// use numeri_core::calculations::deductions::work_from_home_deduction_for;
///
/// # let config = TaxYearConfig {
/// #     tax_year: "2024-25".to_string(),
/// #     brackets: vec![TaxBracket {
/// #         min: dec!(0),
/// #         max: None,
/// #         rate: dec!(0),
/// #         description: String::new(),
/// #     }],
/// #     medicare_levy: MedicareLevyConfig { rate: dec!(0.02), threshold: dec!(24276) },
/// #     lito: LitoConfig {
/// #         max_offset: dec!(700),
/// #         threshold_1: dec!(37500),
/// #         threshold_2: dec!(45000),
/// #     },
/// #     small_business_offset: SmallBusinessOffsetConfig {
/// #         max_offset: dec!(1000),
/// #         threshold: dec!(5000),
/// #         cutoff: dec!(25000),
/// #     },
/// #     work_from_home_rate: dec!(0.70),
/// #     instant_asset_writeoff: dec!(20000),
/// #     super_guarantee_rate: dec!(0.115),
/// # };
/// assert_eq!(work_from_home_deduction_for(&config, dec!(1000)), Ok(dec!(700.00)));
/// ```
pub fn work_from_home_deduction_for(
    config: &TaxYearConfig,
    hours_worked: Decimal,
) -> Result<Decimal, InvalidInputError> {
    if hours_worked < Decimal::ZERO {
        return Err(InvalidInputError::Negative {
            field: "hours_worked",
            value: hours_worked,
        });
    }
    Ok(round_to_cents(hours_worked * config.work_from_home_rate))
}

/// Calculates the superannuation guarantee contribution on ordinary
/// earnings.
pub fn super_guarantee_for(
    config: &TaxYearConfig,
    ordinary_earnings: Decimal,
) -> Result<Decimal, InvalidInputError> {
    if ordinary_earnings < Decimal::ZERO {
        return Err(InvalidInputError::Negative {
            field: "ordinary_earnings",
            value: ordinary_earnings,
        });
    }
    Ok(round_to_cents(ordinary_earnings * config.super_guarantee_rate))
}
