use crate::invoices::FilterState;
use crate::ui::Route;
use dioxus::prelude::*;

/// Welcome screen
#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "flex min-h-screen flex-col p-6",
            div { class: "flex h-20 shrink-0 items-end rounded-lg bg-blue-500 p-4 md:h-52",
                span { class: "text-3xl font-bold text-white", "Invoices" }
            }
            div { class: "mt-4 flex grow flex-col gap-4 md:flex-row",
                div { class: "flex flex-col justify-center gap-6 rounded-lg bg-gray-50 px-6 py-10 md:w-2/5 md:px-20",
                    p { class: "text-xl text-gray-800 md:text-3xl md:leading-normal",
                        strong { "Welcome." }
                        " Search, browse and page through your customers' invoices."
                    }
                    Link {
                        to: Route::Invoices {
                            params: FilterState::default().to_search_params(),
                        },
                        class: "flex items-center gap-5 self-start rounded-lg bg-blue-500 px-6 py-3 text-sm font-medium text-white transition-colors hover:bg-blue-400 md:text-base",
                        span { "Open dashboard" }
                        span { "→" }
                    }
                }
            }
        }
    }
}
