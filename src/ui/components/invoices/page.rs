use crate::invoices::{FilterState, SearchParams};
use dioxus::prelude::*;

use super::pagination::Pagination;
use super::search::Search;
use super::table::InvoicesTable;

/// Invoices page: search, table and pagination for the URL's filter
#[component]
pub fn Invoices(params: ReadSignal<SearchParams>) -> Element {
    let filter = use_memo(move || FilterState::from_search_params(&params.read()));

    rsx! {
        div { class: "w-full",
            div { class: "flex w-full items-center justify-between",
                h1 { class: "text-2xl", "Invoices" }
            }
            div { class: "mt-4 flex items-center justify-between gap-2 md:mt-8",
                Search { placeholder: "Search invoices...", filter }
            }
            InvoicesTable { filter }
            div { class: "mt-5 flex w-full justify-center", Pagination { filter } }
        }
    }
}
