mod app;
mod home;
mod invoice_source_context;
pub mod invoices;
mod side_nav;

pub use app::App;
pub use home::Home;
pub use invoice_source_context::use_invoice_source;
pub use invoices::Invoices;
pub use side_nav::SideNav;
