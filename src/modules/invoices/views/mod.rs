mod invoice_line_item;

pub use invoice_line_item::InvoiceLineItem;
