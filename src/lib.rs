//! Invoice line item presentation
//!
//! Read-only views over billing provider line items: formatted totals,
//! subscription period dates and aggregate tax percentages.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{AppError, CurrencyFormatter, MinorUnitFormatter, Result};
pub use modules::invoices;
pub use modules::invoices::{InvoiceLineItem, LineItem};
pub use modules::taxes;
