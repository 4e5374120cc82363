mod inputs;
mod lito_config;
mod medicare_levy;
mod small_business_offset_config;
mod tax_bracket;
mod tax_result;
mod tax_year_config;

pub use inputs::{DeductionInput, IncomeInput};
pub use lito_config::LitoConfig;
pub use medicare_levy::MedicareLevyConfig;
pub use small_business_offset_config::SmallBusinessOffsetConfig;
pub use tax_bracket::TaxBracket;
pub use tax_result::{QuickEstimate, TaxCalculationResult};
pub use tax_year_config::TaxYearConfig;
