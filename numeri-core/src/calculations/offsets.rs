//! Non-refundable tax offsets: the low income tax offset and the small
//! business income tax offset.
//!
//! Neither computation caps its result against the tax actually owed; the
//! aggregator applies offsets and floors total tax at zero.

use rust_decimal::Decimal;

use crate::models::{LitoConfig, SmallBusinessOffsetConfig};

/// Calculates the low income tax offset for `taxable_income`.
///
/// The full `max_offset` applies up to `threshold_1`; between the two
/// thresholds the offset tapers along a single linear ramp reaching zero at
/// `threshold_2`; above that it stays zero. The result is clamped to
/// `[0, max_offset]` and unrounded.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use numeri_core::LitoConfig;
/// use numeri_core::calculations::offsets::low_income_tax_offset_for;
///
/// let config = LitoConfig {
///     max_offset: dec!(700),
///     threshold_1: dec!(37500),
///     threshold_2: dec!(45000),
/// };
///
/// assert_eq!(low_income_tax_offset_for(&config, dec!(30000)), dec!(700));
/// assert_eq!(low_income_tax_offset_for(&config, dec!(45000)), dec!(0));
/// ```
pub fn low_income_tax_offset_for(
    config: &LitoConfig,
    taxable_income: Decimal,
) -> Decimal {
    if taxable_income <= config.threshold_1 {
        return config.max_offset;
    }
    if taxable_income >= config.threshold_2 {
        return Decimal::ZERO;
    }

    let ramp = (config.threshold_2 - taxable_income)
        / (config.threshold_2 - config.threshold_1);
    (config.max_offset * ramp).clamp(Decimal::ZERO, config.max_offset)
}

/// Calculates the small business income tax offset.
///
/// The base amount is the share of `income_tax` attributable to business
/// income (the business fraction of taxable income, clamped to `[0, 1]`),
/// capped at `max_offset`. Eligibility tapers on the business income figure
/// itself: nothing below `threshold`, the full base at `threshold`, a linear
/// ramp down to zero at `cutoff`, and zero at or above `cutoff`. The result
/// is unrounded.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use numeri_core::SmallBusinessOffsetConfig;
/// use numeri_core::calculations::offsets::small_business_offset_for;
///
/// let config = SmallBusinessOffsetConfig {
///     max_offset: dec!(1000),
///     threshold: dec!(5000),
///     cutoff: dec!(25000),
/// };
///
/// // A sixth of the $9,967 income tax is attributable to business income,
/// // capped at $1,000, then scaled by the taper ramp (15000 / 20000).
/// let offset = small_business_offset_for(&config, dec!(10000), dec!(60000), dec!(9967));
/// assert_eq!(offset, dec!(750.00));
///
/// // Business income at the cutoff earns nothing.
/// assert_eq!(
///     small_business_offset_for(&config, dec!(25000), dec!(60000), dec!(9967)),
///     dec!(0)
/// );
/// ```
pub fn small_business_offset_for(
    config: &SmallBusinessOffsetConfig,
    business_income: Decimal,
    taxable_income: Decimal,
    income_tax: Decimal,
) -> Decimal {
    if business_income < config.threshold || business_income >= config.cutoff {
        return Decimal::ZERO;
    }
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let business_fraction =
        (business_income / taxable_income).clamp(Decimal::ZERO, Decimal::ONE);
    let base = (income_tax * business_fraction).min(config.max_offset);

    let ramp = (config.cutoff - business_income) / (config.cutoff - config.threshold);
    base * ramp
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn standard_lito() -> LitoConfig {
        LitoConfig {
            max_offset: dec!(700),
            threshold_1: dec!(37500),
            threshold_2: dec!(45000),
        }
    }

    fn standard_small_business() -> SmallBusinessOffsetConfig {
        SmallBusinessOffsetConfig {
            max_offset: dec!(1000),
            threshold: dec!(5000),
            cutoff: dec!(25000),
        }
    }

    // =========================================================================
    // low_income_tax_offset_for tests
    // =========================================================================

    #[test]
    fn full_offset_below_first_threshold() {
        assert_eq!(
            low_income_tax_offset_for(&standard_lito(), dec!(30000)),
            dec!(700)
        );
    }

    #[test]
    fn full_offset_at_first_threshold_exactly() {
        assert_eq!(
            low_income_tax_offset_for(&standard_lito(), dec!(37500)),
            dec!(700)
        );
    }

    #[test]
    fn offset_tapers_between_thresholds() {
        // 700 * (45000 - 40000) / 7500, a repeating decimal that only gets
        // rounded when reported.
        let offset = low_income_tax_offset_for(&standard_lito(), dec!(40000));

        assert_eq!(
            crate::calculations::common::round_to_cents(offset),
            dec!(466.67)
        );
    }

    #[test]
    fn zero_offset_at_second_threshold_exactly() {
        assert_eq!(
            low_income_tax_offset_for(&standard_lito(), dec!(45000)),
            dec!(0)
        );
    }

    #[test]
    fn zero_offset_above_second_threshold() {
        assert_eq!(
            low_income_tax_offset_for(&standard_lito(), dec!(100000)),
            dec!(0)
        );
    }

    #[test]
    fn offset_never_exceeds_the_cap() {
        let config = standard_lito();
        for income in [dec!(0), dec!(20000), dec!(37500), dec!(41000), dec!(44999)] {
            let offset = low_income_tax_offset_for(&config, income);
            assert!(offset >= dec!(0), "offset negative at {income}");
            assert!(offset <= config.max_offset, "offset above cap at {income}");
        }
    }

    // =========================================================================
    // small_business_offset_for tests
    // =========================================================================

    #[test]
    fn no_offset_below_threshold() {
        assert_eq!(
            small_business_offset_for(
                &standard_small_business(),
                dec!(3000),
                dec!(40000),
                dec!(4142)
            ),
            dec!(0)
        );
    }

    #[test]
    fn full_base_at_threshold_exactly() {
        // Fraction: 5000 / 40000 = 0.125, base = 4142 * 0.125 = 517.75,
        // ramp at the threshold is 1.
        assert_eq!(
            small_business_offset_for(
                &standard_small_business(),
                dec!(5000),
                dec!(40000),
                dec!(4142)
            ),
            dec!(517.7500)
        );
    }

    #[test]
    fn base_is_capped_before_the_ramp() {
        // Fraction 1/6 of 9967 is 1661.17, capped at 1000, ramp 0.75.
        assert_eq!(
            small_business_offset_for(
                &standard_small_business(),
                dec!(10000),
                dec!(60000),
                dec!(9967)
            ),
            dec!(750.00)
        );
    }

    #[test]
    fn zero_offset_at_cutoff_exactly() {
        assert_eq!(
            small_business_offset_for(
                &standard_small_business(),
                dec!(25000),
                dec!(60000),
                dec!(9967)
            ),
            dec!(0)
        );
    }

    #[test]
    fn zero_offset_above_cutoff() {
        assert_eq!(
            small_business_offset_for(
                &standard_small_business(),
                dec!(40000),
                dec!(80000),
                dec!(16467)
            ),
            dec!(0)
        );
    }

    #[test]
    fn zero_taxable_income_earns_no_offset() {
        // Business income inside the eligible band, but deductions wiped out
        // the taxable income entirely.
        assert_eq!(
            small_business_offset_for(
                &standard_small_business(),
                dec!(10000),
                dec!(0),
                dec!(0)
            ),
            dec!(0)
        );
    }

    #[test]
    fn business_fraction_is_clamped_to_one() {
        // Deductions push taxable income below the business income; the
        // attribution fraction must not exceed 1.
        let offset = small_business_offset_for(
            &standard_small_business(),
            dec!(10000),
            dec!(8000),
            dec!(100),
        );

        // base = min(100 * 1, 1000) = 100, ramp = 0.75
        assert_eq!(offset, dec!(75.00));
    }
}
