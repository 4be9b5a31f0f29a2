use dioxus::prelude::*;

/// Generic failure indicator for the invoices table
#[component]
pub fn InvoicesTableError() -> Element {
    rsx! {
        div { class: "mt-6 rounded-lg bg-red-50 px-4 py-3 text-sm text-red-700",
            p { "Something went wrong while loading invoices." }
        }
    }
}
