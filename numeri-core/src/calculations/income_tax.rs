//! Progressive income tax over a marginal-rate bracket schedule.

use rust_decimal::Decimal;

use crate::calculations::config::{ConfigurationError, validate_schedule};
use crate::models::TaxBracket;

/// Calculates income tax on `taxable_income` under strict marginal-rate
/// semantics: each bracket taxes only the slice of income that falls inside
/// `[min, max)` at its own rate, and the slices are summed. Income exactly on
/// a boundary belongs to the bracket whose `min` equals it.
///
/// The schedule is re-validated defensively on every call; a schedule that
/// does not partition `[0, ∞)` fails with [`ConfigurationError`] rather than
/// producing a silently wrong figure. The returned amount is unrounded so
/// the caller can combine it with other components before reporting.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use numeri_core::TaxBracket;
/// use numeri_core::calculations::income_tax::income_tax_for;
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
///         max: Some(dec!(45000)),
///         rate: dec!(0.19),
///         description: "19% tax rate".into(),
///     },
///     TaxBracket {
///         min: dec!(45000),
///         max: None,
///         rate: dec!(0.325),
///         description: "32.5% tax rate".into(),
///     },
/// ];
///
/// // $26,800 of the $45,000 falls in the 19% band.
/// assert_eq!(income_tax_for(&brackets, dec!(45000)), Ok(dec!(5092.00)));
///
/// // Boundary income belongs to the upper bracket but adds nothing yet.
/// assert_eq!(income_tax_for(&brackets, dec!(18200)), Ok(dec!(0)));
/// ```
pub fn income_tax_for(
    brackets: &[TaxBracket],
    taxable_income: Decimal,
) -> Result<Decimal, ConfigurationError> {
    validate_schedule(brackets)?;

    if taxable_income <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    let mut total = Decimal::ZERO;
    for bracket in brackets {
        if taxable_income <= bracket.min {
            break;
        }
        let upper = match bracket.max {
            Some(max) => taxable_income.min(max),
            None => taxable_income,
        };
        total += (upper - bracket.min) * bracket.rate;
    }

    Ok(total)
}
