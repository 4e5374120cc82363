pub mod calculations;
pub mod engine;
pub mod models;
pub mod provider;

pub use calculations::{CalculationError, ConfigurationError, InvalidInputError};
pub use engine::TaxEngine;
pub use models::*;
pub use provider::{ConfigProvider, ProviderError};
