//! Boundary validation of declared income and deduction figures.
//!
//! Figures arrive from callers as loosely-typed form fields (field name to
//! raw string). This module turns them into strongly-typed inputs exactly
//! once; everything downstream trusts the typed values. Missing fields and
//! blank strings default to zero, negative and non-numeric values are
//! rejected with the offending field named, and nothing is partially
//! computed on failure.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{DeductionInput, IncomeInput};

/// Errors raised when a declared figure cannot be accepted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    /// The raw value did not parse as a decimal amount. This also covers
    /// non-finite text such as `"NaN"` or `"inf"`, which a [`Decimal`]
    /// cannot represent.
    #[error("field '{field}' is not a valid amount: '{value}'")]
    NotNumeric { field: &'static str, value: String },

    /// Declared income and deductions cannot be negative in this model.
    #[error("field '{field}' must not be negative, got {value}")]
    Negative { field: &'static str, value: Decimal },

    /// A field name this engine does not know about.
    #[error("unrecognized field '{field}'")]
    UnknownField { field: String },
}

const INCOME_FIELDS: [&str; 3] = [
    "employment_income",
    "investment_income",
    "business_income",
];

const DEDUCTION_FIELDS: [&str; 3] = [
    "work_related_expenses",
    "work_from_home_deduction",
    "other_deductions",
];

fn parse_field(
    fields: &BTreeMap<String, String>,
    field: &'static str,
) -> Result<Decimal, InvalidInputError> {
    let Some(raw) = fields.get(field) else {
        return Ok(Decimal::ZERO);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        // Blank form fields mean "not provided", same as missing ones.
        return Ok(Decimal::ZERO);
    }
    trimmed
        .parse::<Decimal>()
        .map_err(|_| InvalidInputError::NotNumeric {
            field,
            value: raw.clone(),
        })
}

fn reject_unknown_fields(
    fields: &BTreeMap<String, String>,
    known: &[&str],
) -> Result<(), InvalidInputError> {
    for field in fields.keys() {
        if !known.contains(&field.as_str()) {
            return Err(InvalidInputError::UnknownField {
                field: field.clone(),
            });
        }
    }
    Ok(())
}

fn check_non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<(), InvalidInputError> {
    if value < Decimal::ZERO {
        return Err(InvalidInputError::Negative { field, value });
    }
    Ok(())
}

/// Parses raw income form fields into a validated [`IncomeInput`].
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use rust_decimal_macros::dec;
/// use numeri_core::calculations::validation::income_from_fields;
///
/// let mut fields = BTreeMap::new();
/// fields.insert("employment_income".to_string(), "60000".to_string());
///
/// let income = income_from_fields(&fields).unwrap();
/// assert_eq!(income.employment_income, dec!(60000));
/// assert_eq!(income.business_income, dec!(0));
/// ```
pub fn income_from_fields(
    fields: &BTreeMap<String, String>,
) -> Result<IncomeInput, InvalidInputError> {
    reject_unknown_fields(fields, &INCOME_FIELDS)?;
    let income = IncomeInput {
        employment_income: parse_field(fields, "employment_income")?,
        investment_income: parse_field(fields, "investment_income")?,
        business_income: parse_field(fields, "business_income")?,
    };
    validate_income(&income)?;
    Ok(income)
}

/// Parses raw deduction form fields into a validated [`DeductionInput`].
pub fn deductions_from_fields(
    fields: &BTreeMap<String, String>,
) -> Result<DeductionInput, InvalidInputError> {
    reject_unknown_fields(fields, &DEDUCTION_FIELDS)?;
    let deductions = DeductionInput {
        work_related_expenses: parse_field(fields, "work_related_expenses")?,
        work_from_home_deduction: parse_field(fields, "work_from_home_deduction")?,
        other_deductions: parse_field(fields, "other_deductions")?,
    };
    validate_deductions(&deductions)?;
    Ok(deductions)
}

/// Rejects negative figures on an already-typed [`IncomeInput`].
pub fn validate_income(income: &IncomeInput) -> Result<(), InvalidInputError> {
    check_non_negative("employment_income", income.employment_income)?;
    check_non_negative("investment_income", income.investment_income)?;
    check_non_negative("business_income", income.business_income)?;
    Ok(())
}

/// Rejects negative figures on an already-typed [`DeductionInput`].
pub fn validate_deductions(deductions: &DeductionInput) -> Result<(), InvalidInputError> {
    check_non_negative("work_related_expenses", deductions.work_related_expenses)?;
    check_non_negative(
        "work_from_home_deduction",
        deductions.work_from_home_deduction,
    )?;
    check_non_negative("other_deductions", deductions.other_deductions)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // =========================================================================
    // income_from_fields tests
    // =========================================================================

    #[test]
    fn parses_all_income_fields() {
        let income = income_from_fields(&fields(&[
            ("employment_income", "60000"),
            ("investment_income", "1500.25"),
            ("business_income", "10000"),
        ]))
        .unwrap();

        assert_eq!(
            income,
            IncomeInput {
                employment_income: dec!(60000),
                investment_income: dec!(1500.25),
                business_income: dec!(10000),
            }
        );
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let income = income_from_fields(&fields(&[("employment_income", "60000")])).unwrap();

        assert_eq!(income.investment_income, dec!(0));
        assert_eq!(income.business_income, dec!(0));
    }

    #[test]
    fn blank_field_defaults_to_zero() {
        let income = income_from_fields(&fields(&[
            ("employment_income", "60000"),
            ("investment_income", "   "),
        ]))
        .unwrap();

        assert_eq!(income.investment_income, dec!(0));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let income = income_from_fields(&fields(&[("employment_income", " 60000 ")])).unwrap();

        assert_eq!(income.employment_income, dec!(60000));
    }

    #[test]
    fn empty_map_yields_all_zero_income() {
        let income = income_from_fields(&BTreeMap::new()).unwrap();

        assert_eq!(income, IncomeInput::default());
    }

    #[test]
    fn non_numeric_value_names_the_field() {
        let err = income_from_fields(&fields(&[("investment_income", "abc")])).unwrap_err();

        assert_eq!(
            err,
            InvalidInputError::NotNumeric {
                field: "investment_income",
                value: "abc".to_string(),
            }
        );
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let err = income_from_fields(&fields(&[("employment_income", "NaN")])).unwrap_err();

        assert!(matches!(err, InvalidInputError::NotNumeric { .. }));
    }

    #[test]
    fn negative_income_names_the_field() {
        let err = income_from_fields(&fields(&[("investment_income", "-500")])).unwrap_err();

        assert_eq!(
            err,
            InvalidInputError::Negative {
                field: "investment_income",
                value: dec!(-500),
            }
        );
    }

    #[test]
    fn unknown_income_field_is_rejected() {
        let err = income_from_fields(&fields(&[("salary", "60000")])).unwrap_err();

        assert_eq!(
            err,
            InvalidInputError::UnknownField {
                field: "salary".to_string(),
            }
        );
    }

    // =========================================================================
    // deductions_from_fields tests
    // =========================================================================

    #[test]
    fn parses_all_deduction_fields() {
        let deductions = deductions_from_fields(&fields(&[
            ("work_related_expenses", "1200"),
            ("work_from_home_deduction", "700"),
            ("other_deductions", "300.50"),
        ]))
        .unwrap();

        assert_eq!(
            deductions,
            DeductionInput {
                work_related_expenses: dec!(1200),
                work_from_home_deduction: dec!(700),
                other_deductions: dec!(300.50),
            }
        );
    }

    #[test]
    fn negative_deduction_names_the_field() {
        let err =
            deductions_from_fields(&fields(&[("work_related_expenses", "-1")])).unwrap_err();

        assert_eq!(
            err,
            InvalidInputError::Negative {
                field: "work_related_expenses",
                value: dec!(-1),
            }
        );
    }

    #[test]
    fn income_field_in_deduction_map_is_unknown() {
        let err = deductions_from_fields(&fields(&[("employment_income", "100")])).unwrap_err();

        assert!(matches!(err, InvalidInputError::UnknownField { .. }));
    }

    // =========================================================================
    // typed validation tests
    // =========================================================================

    #[test]
    fn typed_negative_income_is_rejected() {
        let income = IncomeInput {
            business_income: dec!(-0.01),
            ..IncomeInput::default()
        };

        assert_eq!(
            validate_income(&income),
            Err(InvalidInputError::Negative {
                field: "business_income",
                value: dec!(-0.01),
            })
        );
    }

    #[test]
    fn typed_zero_inputs_are_valid() {
        assert_eq!(validate_income(&IncomeInput::default()), Ok(()));
        assert_eq!(validate_deductions(&DeductionInput::default()), Ok(()));
    }
}
