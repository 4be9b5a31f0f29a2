use crate::invoices::SharedInvoiceSource;
use dioxus::prelude::*;

/// Hook to access the invoice source registered at launch
pub fn use_invoice_source() -> SharedInvoiceSource {
    use_context::<SharedInvoiceSource>()
}
