//! Calculation components of the tax engine.
//!
//! Each submodule is a pure function of validated inputs and an immutable
//! tax year configuration; [`assessment`] combines them into one reconciled
//! result.

pub mod assessment;
pub mod common;
pub mod config;
pub mod deductions;
pub mod income_tax;
pub mod medicare;
pub mod offsets;
pub mod validation;

pub use assessment::{CalculationError, assess, quick_estimate};
pub use config::{ConfigurationError, validate_config, validate_schedule};
pub use deductions::{super_guarantee_for, work_from_home_deduction_for};
pub use income_tax::income_tax_for;
pub use medicare::medicare_levy_for;
pub use offsets::{low_income_tax_offset_for, small_business_offset_for};
pub use validation::{
    InvalidInputError, deductions_from_fields, income_from_fields, validate_deductions,
    validate_income,
};
