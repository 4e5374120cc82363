//! Tax year configuration tables and providers.
//!
//! The calculation engine in `numeri-core` takes its rate tables through the
//! [`ConfigProvider`](numeri_core::ConfigProvider) trait. This crate supplies
//! the implementations: built-in published tables, an in-memory
//! [`StaticProvider`], and a CSV [`loader`] for installing replacement
//! bracket schedules.

pub mod builtin;
pub mod loader;
pub mod provider;

pub use builtin::tax_year_2024_25;
pub use loader::{BracketScheduleLoader, BracketScheduleRecord, ScheduleLoaderError};
pub use provider::StaticProvider;
