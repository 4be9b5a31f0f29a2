use crate::db::InvoiceStatus;
use dioxus::prelude::*;

#[component]
pub fn InvoiceStatusBadge(status: InvoiceStatus) -> Element {
    let (class, label, icon) = match status {
        InvoiceStatus::Pending => ("bg-gray-100 text-gray-500", "Pending", "⏱"),
        InvoiceStatus::Paid => ("bg-green-500 text-white", "Paid", "✓"),
    };

    rsx! {
        span { class: "inline-flex items-center rounded-full px-2 py-1 text-xs {class}",
            "{label}"
            span { class: "ml-1 w-4", "{icon}" }
        }
    }
}
