pub mod currency;
pub mod error;
pub mod telemetry;
pub mod timezone;

pub use currency::{Currency, CurrencyFormatter, CurrencyStyle, MinorUnitFormatter};
pub use error::{AppError, Result};
