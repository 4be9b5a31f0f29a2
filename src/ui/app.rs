use dioxus::prelude::*;

use crate::invoices::SearchParams;
use crate::ui::components::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[layout(SideNav)]
    #[route("/dashboard/invoices?:..params")]
    Invoices { params: SearchParams },
}

impl dioxus::router::routable::FromQuery for SearchParams {
    fn from_query(query: &str) -> Self {
        SearchParams::parse(query)
    }
}

#[cfg(feature = "desktop")]
pub fn make_config() -> dioxus::desktop::Config {
    dioxus::desktop::Config::default().with_window(make_window())
}

#[cfg(feature = "desktop")]
fn make_window() -> dioxus::desktop::WindowBuilder {
    dioxus::desktop::WindowBuilder::new()
        .with_title("Invoices")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}
