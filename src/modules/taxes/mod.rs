pub mod services;

pub use services::TaxPercentageCalculator;
