// Invoices module

pub mod models;
pub mod views;

pub use models::{LineItem, LineItemType, Period, TaxAmount, TaxRate};
pub use views::InvoiceLineItem;
