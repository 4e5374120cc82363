//! CSV bracket-schedule loader.
//!
//! Lets operators install a new year's marginal rate schedule from a CSV
//! file instead of a recompile. One row per bracket:
//!
//! ```csv
//! tax_year,min,max,rate,description
//! 2024-25,0,18200,0,Tax-free threshold
//! 2024-25,18200,45000,0.19,19% tax rate
//! 2024-25,180000,,0.45,45% tax rate
//! ```
//!
//! A blank `max` marks the unbounded top bracket. Loading replaces the
//! named year's whole schedule, so running the same load twice produces the
//! same provider state.

use std::io::Read;

use numeri_core::{ConfigurationError, TaxBracket};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::provider::StaticProvider;

/// Errors raised while parsing or installing a bracket schedule.
#[derive(Debug, Error)]
pub enum ScheduleLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("tax year '{0}' is not registered with the provider")]
    UnknownTaxYear(String),

    #[error("schedule for tax year '{tax_year}' is invalid: {source}")]
    InvalidSchedule {
        tax_year: String,
        source: ConfigurationError,
    },
}

impl From<csv::Error> for ScheduleLoaderError {
    fn from(err: csv::Error) -> Self {
        ScheduleLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of a bracket schedule CSV file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BracketScheduleRecord {
    pub tax_year: String,
    pub min: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max: Option<Decimal>,
    pub rate: Decimal,
    pub description: String,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for bracket schedules.
pub struct BracketScheduleLoader;

impl BracketScheduleLoader {
    /// Parses schedule records from any CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketScheduleRecord>, ScheduleLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BracketScheduleRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Installs the parsed records into `provider`, replacing the bracket
    /// schedule of every tax year the records mention.
    ///
    /// Each mentioned year must already be registered (the rest of its
    /// configuration is kept as-is), and each replacement schedule must pass
    /// the partition invariant before it is accepted. Returns the number of
    /// brackets installed.
    pub fn load(
        provider: &mut StaticProvider,
        records: &[BracketScheduleRecord],
    ) -> Result<usize, ScheduleLoaderError> {
        let mut years: Vec<&str> = records.iter().map(|r| r.tax_year.as_str()).collect();
        years.sort_unstable();
        years.dedup();

        let mut installed = 0;

        for tax_year in years {
            let mut brackets: Vec<TaxBracket> = records
                .iter()
                .filter(|record| record.tax_year == tax_year)
                .map(|record| TaxBracket {
                    min: record.min,
                    max: record.max,
                    rate: record.rate,
                    description: record.description.clone(),
                })
                .collect();
            // Rows may arrive in any order; the schedule is ordered by min.
            brackets.sort_by(|a, b| a.min.cmp(&b.min));

            let mut config = provider
                .get(tax_year)
                .cloned()
                .ok_or_else(|| ScheduleLoaderError::UnknownTaxYear(tax_year.to_string()))?;
            installed += brackets.len();
            config.brackets = brackets;

            provider
                .insert(config)
                .map_err(|source| ScheduleLoaderError::InvalidSchedule {
                    tax_year: tax_year.to_string(),
                    source,
                })?;
        }

        Ok(installed)
    }
}
