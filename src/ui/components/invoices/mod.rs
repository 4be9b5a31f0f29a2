mod error;
mod hooks;
mod list;
mod page;
mod pagination;
mod search;
mod skeleton;
mod status;
mod table;

pub use hooks::use_invoice_resource;
pub use page::Invoices;
pub use table::InvoicesTable;
