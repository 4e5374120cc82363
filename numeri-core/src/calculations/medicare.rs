//! Medicare levy with a shade-in zone above the low-income threshold.

use rust_decimal::Decimal;

use crate::models::MedicareLevyConfig;

/// Rate applied to the excess over the threshold inside the shade-in zone:
/// ten cents per dollar, steeper than the flat levy so the phased amount
/// catches up with the full-rate amount instead of jumping to it.
pub const SHADE_IN_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Calculates the medicare levy on `taxable_income`.
///
/// At or below the threshold the levy is zero. Above it, the levy is the
/// lesser of the full-rate amount (`rate × taxable_income`) and the shade-in
/// amount ([`SHADE_IN_RATE`] times the excess over the threshold). Both
/// candidates grow with income, so the levy is continuous at the threshold
/// and monotonically non-decreasing everywhere. The returned amount is
/// unrounded.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use numeri_core::MedicareLevyConfig;
/// use numeri_core::calculations::medicare::medicare_levy_for;
///
/// let config = MedicareLevyConfig {
///     rate: dec!(0.02),
///     threshold: dec!(24276),
/// };
///
/// // Below the threshold: no levy.
/// assert_eq!(medicare_levy_for(&config, dec!(20000)), dec!(0));
///
/// // Just above it: the shade-in amount is still the smaller one.
/// assert_eq!(medicare_levy_for(&config, dec!(25000)), dec!(72.40));
///
/// // Well above: the flat rate applies to the whole income.
/// assert_eq!(medicare_levy_for(&config, dec!(50000)), dec!(1000.00));
/// ```
pub fn medicare_levy_for(
    config: &MedicareLevyConfig,
    taxable_income: Decimal,
) -> Decimal {
    if taxable_income <= config.threshold {
        return Decimal::ZERO;
    }

    let full_rate_amount = taxable_income * config.rate;
    let shade_in_amount = (taxable_income - config.threshold) * SHADE_IN_RATE;
    full_rate_amount.min(shade_in_amount)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn standard_levy() -> MedicareLevyConfig {
        MedicareLevyConfig {
            rate: dec!(0.02),
            threshold: dec!(24276),
        }
    }

    #[test]
    fn shade_in_rate_is_ten_percent() {
        assert_eq!(SHADE_IN_RATE, dec!(0.10));
    }

    #[test]
    fn no_levy_below_threshold() {
        assert_eq!(medicare_levy_for(&standard_levy(), dec!(20000)), dec!(0));
    }

    #[test]
    fn no_levy_at_threshold_exactly() {
        assert_eq!(medicare_levy_for(&standard_levy(), dec!(24276)), dec!(0));
    }

    #[test]
    fn levy_is_continuous_just_above_threshold() {
        // One cent over the threshold shades in at a tenth of a cent, not
        // the full-rate amount of roughly $485.
        assert_eq!(
            medicare_levy_for(&standard_levy(), dec!(24276.01)),
            dec!(0.001)
        );
    }

    #[test]
    fn shade_in_amount_applies_inside_the_zone() {
        // 0.10 * (25000 - 24276) beats 0.02 * 25000.
        assert_eq!(
            medicare_levy_for(&standard_levy(), dec!(25000)),
            dec!(72.40)
        );
    }

    #[test]
    fn shade_in_meets_full_rate_at_catch_up_point() {
        // 0.10 * (30345 - 24276) == 0.02 * 30345 == 606.90
        assert_eq!(
            medicare_levy_for(&standard_levy(), dec!(30345)),
            dec!(606.90)
        );
    }

    #[test]
    fn full_rate_applies_above_catch_up_point() {
        assert_eq!(
            medicare_levy_for(&standard_levy(), dec!(50000)),
            dec!(1000.00)
        );
    }

    #[test]
    fn levy_is_monotone_non_decreasing() {
        let config = standard_levy();
        let mut previous = Decimal::ZERO;
        let mut income = dec!(23000);
        // Walk through the threshold, the shade-in zone, and beyond in
        // $250 steps.
        while income <= dec!(35000) {
            let levy = medicare_levy_for(&config, income);
            assert!(
                levy >= previous,
                "levy decreased at income {income}: {levy} < {previous}"
            );
            previous = levy;
            income += dec!(250);
        }
    }

    #[test]
    fn zero_rate_config_levies_nothing() {
        let config = MedicareLevyConfig {
            rate: dec!(0),
            threshold: dec!(0),
        };

        assert_eq!(medicare_levy_for(&config, dec!(100000)), dec!(0));
    }
}
