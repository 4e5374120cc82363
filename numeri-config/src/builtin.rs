//! Built-in tax year configuration tables.

use numeri_core::{
    LitoConfig, MedicareLevyConfig, SmallBusinessOffsetConfig, TaxBracket, TaxYearConfig,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn bracket(
    min: Decimal,
    max: Option<Decimal>,
    rate: Decimal,
    description: &str,
) -> TaxBracket {
    TaxBracket {
        min,
        max,
        rate,
        description: description.to_string(),
    }
}

/// Published 2024-25 figures, including the stage 3 bracket cuts.
pub fn tax_year_2024_25() -> TaxYearConfig {
    TaxYearConfig {
        tax_year: "2024-25".to_string(),
        brackets: vec![
            bracket(dec!(0), Some(dec!(18200)), dec!(0), "Tax-free threshold"),
            bracket(dec!(18200), Some(dec!(45000)), dec!(0.19), "19% tax rate"),
            bracket(
                dec!(45000),
                Some(dec!(120000)),
                dec!(0.325),
                "32.5% tax rate",
            ),
            bracket(dec!(120000), Some(dec!(180000)), dec!(0.37), "37% tax rate"),
            bracket(dec!(180000), None, dec!(0.45), "45% tax rate"),
        ],
        medicare_levy: MedicareLevyConfig {
            rate: dec!(0.02),
            threshold: dec!(24276),
        },
        lito: LitoConfig {
            max_offset: dec!(700),
            threshold_1: dec!(37500),
            threshold_2: dec!(45000),
        },
        small_business_offset: SmallBusinessOffsetConfig {
            max_offset: dec!(1000),
            threshold: dec!(5000),
            cutoff: dec!(25000),
        },
        work_from_home_rate: dec!(0.70),
        instant_asset_writeoff: dec!(20000),
        super_guarantee_rate: dec!(0.115),
    }
}
