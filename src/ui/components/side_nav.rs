use crate::invoices::FilterState;
use crate::ui::Route;
use dioxus::prelude::*;

/// Dashboard layout: navigation column on the left, page on the right
#[component]
pub fn SideNav() -> Element {
    rsx! {
        div { class: "flex h-screen flex-col md:flex-row md:overflow-hidden",
            div { class: "w-full flex-none md:w-64",
                div { class: "flex h-full flex-col px-3 py-4 md:px-2",
                    Link {
                        to: Route::Home {},
                        class: "mb-2 flex h-20 items-end justify-start rounded-md bg-blue-600 p-4 md:h-40",
                        span { class: "text-2xl font-bold text-white", "Invoices" }
                    }
                    div { class: "flex grow flex-row justify-between space-x-2 md:flex-col md:space-x-0 md:space-y-2",
                        Link {
                            to: Route::Invoices {
                                params: FilterState::default().to_search_params(),
                            },
                            class: "flex h-[48px] grow items-center justify-center gap-2 rounded-md bg-gray-50 p-3 text-sm font-medium hover:bg-sky-100 hover:text-blue-600 md:flex-none md:justify-start md:p-2 md:px-3",
                            active_class: "bg-sky-100 text-blue-600",
                            "Invoices"
                        }
                        div { class: "hidden h-auto w-full grow rounded-md bg-gray-50 md:block" }
                    }
                }
            }
            div { class: "flex-grow p-6 md:overflow-y-auto md:p-12", Outlet::<Route> {} }
        }
    }
}
