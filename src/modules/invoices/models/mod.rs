mod line_item;
mod tax_amount;

pub use line_item::{LineItem, LineItemType, Period};
pub use tax_amount::{TaxAmount, TaxRate};
