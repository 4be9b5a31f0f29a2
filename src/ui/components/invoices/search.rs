use std::time::Duration;

use crate::invoices::FilterState;
use crate::ui::Route;
use dioxus::core::Task;
use dioxus::prelude::*;
use tracing::debug;

/// Wait this long after the last keystroke before updating the URL
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Search box that writes the query into the URL, resetting to page 1
#[component]
pub fn Search(placeholder: String, filter: Memo<FilterState>) -> Element {
    let navigator = navigator();
    let mut term = use_signal(|| filter.peek().query().to_string());
    let mut pending = use_signal(|| None::<Task>);

    rsx! {
        div { class: "relative flex flex-1 flex-shrink-0",
            label { r#for: "search", class: "sr-only", "Search" }
            input {
                id: "search",
                class: "peer block w-full rounded-md border border-gray-200 py-[9px] pl-10 text-sm outline-2 placeholder:text-gray-500",
                placeholder: "{placeholder}",
                value: "{term}",
                oninput: move |event| {
                    let query = event.value();
                    term.set(query.clone());

                    if let Some(task) = pending.write().take() {
                        task.cancel();
                    }
                    let task = spawn(async move {
                        tokio::time::sleep(SEARCH_DEBOUNCE).await;
                        debug!("Searching invoices for {:?}", query);
                        let next = FilterState::new(query, 1);
                        navigator
                            .replace(Route::Invoices {
                                params: next.to_search_params(),
                            });
                    });
                    pending.set(Some(task));
                },
            }
            span { class: "absolute left-3 top-1/2 -translate-y-1/2 text-gray-500 peer-focus:text-gray-900",
                "🔍"
            }
        }
    }
}
