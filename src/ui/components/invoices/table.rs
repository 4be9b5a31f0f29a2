use crate::invoices::{FilterState, ResourceState};
use dioxus::prelude::*;

use super::error::InvoicesTableError;
use super::hooks::use_invoice_resource;
use super::list::InvoiceList;
use super::skeleton::InvoicesTableSkeleton;

/// Invoices for `filter`, rendered according to the fetch state
#[component]
pub fn InvoicesTable(filter: Memo<FilterState>) -> Element {
    let invoices = use_invoice_resource(filter);
    let state = invoices();

    match state {
        ResourceState::Pending => rsx! {
            InvoicesTableSkeleton {}
        },
        ResourceState::Rejected(_) => rsx! {
            InvoicesTableError {}
        },
        ResourceState::Resolved(invoices) => rsx! {
            InvoiceList { invoices }
        },
    }
}
