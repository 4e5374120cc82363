//! Structural validation of tax year configuration.
//!
//! A broken schedule is an operational problem, not a user error, so every
//! violation here surfaces as a [`ConfigurationError`] rather than an input
//! error. The progressive calculator re-checks the bracket partition
//! defensively instead of assuming its caller validated the whole config.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{
    LitoConfig, MedicareLevyConfig, SmallBusinessOffsetConfig, TaxBracket, TaxYearConfig,
};

/// Errors raised when a tax year configuration violates its structural
/// invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The bracket schedule has no brackets at all.
    #[error("bracket schedule is empty")]
    EmptySchedule,

    /// The lowest bracket does not start at zero, leaving a gap below it.
    #[error("first bracket must start at zero, got {0}")]
    FirstBracketNotZero(Decimal),

    /// Adjacent brackets leave a gap or overlap between them.
    #[error("bracket boundary mismatch: expected a bracket starting at {expected}, got {found}")]
    BoundaryMismatch { expected: Decimal, found: Decimal },

    /// A bounded bracket whose upper bound is not above its lower bound.
    #[error("bracket starting at {min} has upper bound {max} at or below it")]
    InvertedBracket { min: Decimal, max: Decimal },

    /// An unbounded bracket appears before the end of the schedule.
    #[error("unbounded bracket starting at {0} must be the last bracket")]
    UnboundedBracketNotLast(Decimal),

    /// The schedule ends with a bounded bracket, leaving top incomes untaxed.
    #[error("last bracket must be unbounded")]
    MissingTopBracket,

    /// A bracket rate outside `[0, 1]`.
    #[error("bracket rate must be between 0 and 1, got {0}")]
    InvalidBracketRate(Decimal),

    /// The medicare levy rate is outside `[0, 1]`.
    #[error("medicare levy rate must be between 0 and 1, got {0}")]
    InvalidLevyRate(Decimal),

    /// The medicare levy threshold is negative.
    #[error("medicare levy threshold must be non-negative, got {0}")]
    NegativeLevyThreshold(Decimal),

    /// The low income tax offset cap is negative.
    #[error("low income tax offset cap must be non-negative, got {0}")]
    NegativeLitoCap(Decimal),

    /// The low income tax offset taper thresholds are not strictly ordered.
    #[error("low income tax offset thresholds must be ordered, got {threshold_1} and {threshold_2}")]
    InvalidLitoThresholds {
        threshold_1: Decimal,
        threshold_2: Decimal,
    },

    /// The small business offset cap is negative.
    #[error("small business offset cap must be non-negative, got {0}")]
    NegativeSmallBusinessCap(Decimal),

    /// The small business taper range is empty or inverted.
    #[error("small business offset threshold {threshold} must be below cutoff {cutoff}")]
    InvalidSmallBusinessRange { threshold: Decimal, cutoff: Decimal },

    /// A miscellaneous per-year amount that must not be negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount {
        field: &'static str,
        value: Decimal,
    },

    /// A miscellaneous per-year rate outside `[0, 1]`.
    #[error("{field} must be between 0 and 1, got {value}")]
    InvalidRate {
        field: &'static str,
        value: Decimal,
    },
}

/// Checks that `brackets` partition `[0, ∞)` with no gaps or overlaps.
///
/// The required shape, in schedule order:
/// - the first bracket starts at zero;
/// - each bounded bracket's `max` equals the next bracket's `min`;
/// - exactly the last bracket is unbounded (`max = None`);
/// - every rate lies in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use numeri_core::TaxBracket;
/// use numeri_core::calculations::config::validate_schedule;
///
/// let brackets = vec![
///     TaxBracket {
///         min: dec!(0),
///         max: Some(dec!(18200)),
///         rate: dec!(0),
///         description: "Tax-free threshold".into(),
///     },
///     TaxBracket {
///         min: dec!(18200),
///         max: None,
///         rate: dec!(0.19),
///         description: "19% tax rate".into(),
///     },
/// ];
///
/// assert!(validate_schedule(&brackets).is_ok());
/// ```
pub fn validate_schedule(brackets: &[TaxBracket]) -> Result<(), ConfigurationError> {
    let first = brackets.first().ok_or(ConfigurationError::EmptySchedule)?;
    if first.min != Decimal::ZERO {
        return Err(ConfigurationError::FirstBracketNotZero(first.min));
    }

    for (position, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return Err(ConfigurationError::InvalidBracketRate(bracket.rate));
        }
        match bracket.max {
            Some(max) => {
                if max <= bracket.min {
                    return Err(ConfigurationError::InvertedBracket {
                        min: bracket.min,
                        max,
                    });
                }
                let next = brackets
                    .get(position + 1)
                    .ok_or(ConfigurationError::MissingTopBracket)?;
                if next.min != max {
                    return Err(ConfigurationError::BoundaryMismatch {
                        expected: max,
                        found: next.min,
                    });
                }
            }
            None => {
                if position + 1 != brackets.len() {
                    return Err(ConfigurationError::UnboundedBracketNotLast(bracket.min));
                }
            }
        }
    }

    Ok(())
}

fn validate_levy(levy: &MedicareLevyConfig) -> Result<(), ConfigurationError> {
    if levy.rate < Decimal::ZERO || levy.rate > Decimal::ONE {
        return Err(ConfigurationError::InvalidLevyRate(levy.rate));
    }
    if levy.threshold < Decimal::ZERO {
        return Err(ConfigurationError::NegativeLevyThreshold(levy.threshold));
    }
    Ok(())
}

fn validate_lito(lito: &LitoConfig) -> Result<(), ConfigurationError> {
    if lito.max_offset < Decimal::ZERO {
        return Err(ConfigurationError::NegativeLitoCap(lito.max_offset));
    }
    if lito.threshold_1 >= lito.threshold_2 {
        return Err(ConfigurationError::InvalidLitoThresholds {
            threshold_1: lito.threshold_1,
            threshold_2: lito.threshold_2,
        });
    }
    Ok(())
}

fn validate_small_business(
    offset: &SmallBusinessOffsetConfig,
) -> Result<(), ConfigurationError> {
    if offset.max_offset < Decimal::ZERO {
        return Err(ConfigurationError::NegativeSmallBusinessCap(
            offset.max_offset,
        ));
    }
    if offset.threshold >= offset.cutoff {
        return Err(ConfigurationError::InvalidSmallBusinessRange {
            threshold: offset.threshold,
            cutoff: offset.cutoff,
        });
    }
    Ok(())
}

/// Validates a whole [`TaxYearConfig`]: bracket partition, levy, both offset
/// schedules, and the per-year rates and amounts.
pub fn validate_config(config: &TaxYearConfig) -> Result<(), ConfigurationError> {
    validate_schedule(&config.brackets)?;
    validate_levy(&config.medicare_levy)?;
    validate_lito(&config.lito)?;
    validate_small_business(&config.small_business_offset)?;

    if config.work_from_home_rate < Decimal::ZERO {
        return Err(ConfigurationError::NegativeAmount {
            field: "work_from_home_rate",
            value: config.work_from_home_rate,
        });
    }
    if config.instant_asset_writeoff < Decimal::ZERO {
        return Err(ConfigurationError::NegativeAmount {
            field: "instant_asset_writeoff",
            value: config.instant_asset_writeoff,
        });
    }
    if config.super_guarantee_rate < Decimal::ZERO || config.super_guarantee_rate > Decimal::ONE {
        return Err(ConfigurationError::InvalidRate {
            field: "super_guarantee_rate",
            value: config.super_guarantee_rate,
        });
    }

    Ok(())
}
