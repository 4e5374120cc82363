//! Shared helpers for the calculation components.

use rust_decimal::Decimal;

/// Rounds a value to cents using half-up (away from zero) rounding.
///
/// Applied only when a figure is reported, never between intermediate steps,
/// so rounding error cannot compound across brackets and offsets.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use numeri_core::calculations::common::round_to_cents;
///
/// assert_eq!(round_to_cents(dec!(466.664)), dec!(466.66));
/// assert_eq!(round_to_cents(dec!(466.665)), dec!(466.67));
/// ```
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Floors a value at zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use numeri_core::calculations::common::floor_at_zero;
///
/// assert_eq!(floor_at_zero(dec!(-12.50)), dec!(0));
/// assert_eq!(floor_at_zero(dec!(12.50)), dec!(12.50));
/// ```
pub fn floor_at_zero(value: Decimal) -> Decimal {
    if value > Decimal::ZERO {
        value
    } else {
        Decimal::ZERO
    }
}
