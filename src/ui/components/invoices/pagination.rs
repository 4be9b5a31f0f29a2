use crate::invoices::pagination::{generate_pagination, PageItem};
use crate::invoices::FilterState;
use crate::ui::components::use_invoice_source;
use crate::ui::Route;
use dioxus::prelude::*;
use tracing::warn;

const ARROW_CLASS: &str = "flex h-10 w-10 items-center justify-center rounded-md border";

/// Page links for the current query
#[component]
pub fn Pagination(filter: Memo<FilterState>) -> Element {
    let source = use_invoice_source();
    let query = use_memo(move || filter.read().query().to_string());

    let pages_resource = use_resource(move || {
        let source = source.clone();
        let query = query();
        async move {
            let result = source.fetch_invoice_pages(&query).await;
            if let Err(e) = &result {
                warn!("Failed to load invoice page count: {}", e);
            }
            result
        }
    });

    let total_pages = pages_resource
        .read()
        .as_ref()
        .and_then(|r| r.as_ref().ok())
        .copied()
        .unwrap_or(0);
    let current = filter();

    if total_pages == 0 {
        return rsx! {};
    }

    let items = generate_pagination(current.page(), total_pages);
    let previous = (current.page() > 1).then(|| current.with_page(current.page() - 1));
    let next = (current.page() < total_pages).then(|| current.with_page(current.page() + 1));

    rsx! {
        div { class: "inline-flex",
            PaginationArrow { label: "←", target: previous }
            div { class: "flex -space-x-px",
                for (i, item) in items.into_iter().enumerate() {
                    match item {
                        PageItem::Page(page) => rsx! {
                            PaginationNumber {
                                key: "{i}",
                                page,
                                is_active: page == current.page(),
                                target: current.with_page(page),
                            }
                        },
                        PageItem::Ellipsis => rsx! {
                            div { key: "{i}", class: "flex h-10 w-10 items-center justify-center border text-gray-300", "..." }
                        },
                    }
                }
            }
            PaginationArrow { label: "→", target: next }
        }
    }
}

#[component]
fn PaginationNumber(page: u32, is_active: bool, target: FilterState) -> Element {
    if is_active {
        return rsx! {
            div { class: "z-10 flex h-10 w-10 items-center justify-center border border-blue-600 bg-blue-600 text-sm text-white",
                "{page}"
            }
        };
    }

    rsx! {
        Link {
            to: Route::Invoices {
                params: target.to_search_params(),
            },
            class: "flex h-10 w-10 items-center justify-center border text-sm hover:bg-gray-100",
            "{page}"
        }
    }
}

#[component]
fn PaginationArrow(label: &'static str, #[props(!optional)] target: Option<FilterState>) -> Element {
    match target {
        Some(target) => rsx! {
            Link {
                to: Route::Invoices {
                    params: target.to_search_params(),
                },
                class: "{ARROW_CLASS} hover:bg-gray-100",
                "{label}"
            }
        },
        None => rsx! {
            div { class: "{ARROW_CLASS} pointer-events-none text-gray-300", "{label}" }
        },
    }
}
