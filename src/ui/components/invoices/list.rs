use crate::db::Invoice;
use crate::invoices::format::{format_currency, format_date_to_local};
use dioxus::prelude::*;

use super::status::InvoiceStatusBadge;

/// Resolved invoices: cards on narrow screens, a table from `md` up.
/// Rows keep the order the source returned them in.
#[component]
pub fn InvoiceList(invoices: Vec<Invoice>) -> Element {
    rsx! {
        div { class: "mt-6 flow-root",
            div { class: "inline-block min-w-full align-middle",
                div { class: "rounded-lg bg-gray-50 p-2 md:pt-0",
                    div { class: "md:hidden",
                        for invoice in invoices.iter() {
                            InvoiceCard { key: "{invoice.id}", invoice: invoice.clone() }
                        }
                    }
                    table { class: "hidden min-w-full text-gray-900 md:table",
                        thead { class: "rounded-lg text-left text-sm font-normal",
                            tr {
                                th { scope: "col", class: "px-4 py-5 font-medium sm:pl-6", "Customer" }
                                th { scope: "col", class: "px-3 py-5 font-medium", "Email" }
                                th { scope: "col", class: "px-3 py-5 font-medium", "Amount" }
                                th { scope: "col", class: "px-3 py-5 font-medium", "Date" }
                                th { scope: "col", class: "px-3 py-5 font-medium", "Status" }
                            }
                        }
                        tbody { class: "bg-white",
                            for invoice in invoices.iter() {
                                InvoiceRow { key: "{invoice.id}", invoice: invoice.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InvoiceCard(invoice: Invoice) -> Element {
    rsx! {
        div { class: "mb-2 w-full rounded-md bg-white p-4",
            div { class: "flex items-center justify-between border-b pb-4",
                div {
                    div { class: "mb-2 flex items-center",
                        CustomerAvatar { name: invoice.customer_name.clone(), image_url: invoice.image_url.clone() }
                        p { class: "ml-2", "{invoice.customer_name}" }
                    }
                    p { class: "text-sm text-gray-500", "{invoice.email}" }
                }
                InvoiceStatusBadge { status: invoice.status }
            }
            div { class: "flex w-full items-center justify-between pt-4",
                div {
                    p { class: "text-xl font-medium", {format_currency(invoice.amount_cents)} }
                    p { {format_date_to_local(invoice.due_date)} }
                }
            }
        }
    }
}

#[component]
fn InvoiceRow(invoice: Invoice) -> Element {
    rsx! {
        tr { class: "w-full border-b py-3 text-sm last-of-type:border-none",
            td { class: "whitespace-nowrap py-3 pl-6 pr-3",
                div { class: "flex items-center gap-3",
                    CustomerAvatar { name: invoice.customer_name.clone(), image_url: invoice.image_url.clone() }
                    p { "{invoice.customer_name}" }
                }
            }
            td { class: "whitespace-nowrap px-3 py-3", "{invoice.email}" }
            td { class: "whitespace-nowrap px-3 py-3", {format_currency(invoice.amount_cents)} }
            td { class: "whitespace-nowrap px-3 py-3", {format_date_to_local(invoice.due_date)} }
            td { class: "whitespace-nowrap px-3 py-3",
                InvoiceStatusBadge { status: invoice.status }
            }
        }
    }
}

#[component]
fn CustomerAvatar(name: String, image_url: String) -> Element {
    rsx! {
        img {
            src: "{image_url}",
            class: "rounded-full",
            width: "28",
            height: "28",
            alt: "{name}'s profile picture",
        }
    }
}
