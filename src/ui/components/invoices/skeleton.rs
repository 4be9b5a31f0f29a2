use crate::db::ITEMS_PER_PAGE;
use dioxus::prelude::*;

const SHIMMER: &str = "animate-pulse rounded bg-gray-100";

/// Placeholder with the same layout as the invoice list and no data
#[component]
pub fn InvoicesTableSkeleton() -> Element {
    rsx! {
        div { class: "mt-6 flow-root",
            div { class: "inline-block min-w-full align-middle",
                div { class: "rounded-lg bg-gray-50 p-2 md:pt-0",
                    div { class: "md:hidden",
                        for i in 0..ITEMS_PER_PAGE {
                            InvoiceCardSkeleton { key: "{i}" }
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
                            for i in 0..ITEMS_PER_PAGE {
                                TableRowSkeleton { key: "{i}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InvoiceCardSkeleton() -> Element {
    rsx! {
        div { class: "mb-2 w-full rounded-md bg-white p-4",
            div { class: "flex items-center justify-between border-b border-gray-100 pb-8",
                div { class: "flex items-center",
                    div { class: "mr-2 h-8 w-8 rounded-full {SHIMMER}" }
                    div { class: "h-6 w-16 {SHIMMER}" }
                }
                div { class: "h-6 w-16 {SHIMMER}" }
            }
            div { class: "flex w-full items-center justify-between pt-4",
                div {
                    div { class: "h-6 w-16 {SHIMMER}" }
                    div { class: "mt-2 h-6 w-24 {SHIMMER}" }
                }
            }
        }
    }
}

#[component]
fn TableRowSkeleton() -> Element {
    rsx! {
        tr { class: "w-full border-b border-gray-100 last-of-type:border-none",
            td { class: "relative overflow-hidden whitespace-nowrap py-3 pl-6 pr-3",
                div { class: "flex items-center gap-3",
                    div { class: "h-8 w-8 rounded-full {SHIMMER}" }
                    div { class: "h-6 w-24 {SHIMMER}" }
                }
            }
            td { class: "whitespace-nowrap px-3 py-3",
                div { class: "h-6 w-32 {SHIMMER}" }
            }
            td { class: "whitespace-nowrap px-3 py-3",
                div { class: "h-6 w-16 {SHIMMER}" }
            }
            td { class: "whitespace-nowrap px-3 py-3",
                div { class: "h-6 w-16 {SHIMMER}" }
            }
            td { class: "whitespace-nowrap px-3 py-3",
                div { class: "h-6 w-16 {SHIMMER}" }
            }
        }
    }
}
