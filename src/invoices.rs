//! Invoice listing: URL filter derivation, the fetch state machine, and the
//! helpers the table needs to display results.

pub mod filter;
pub mod format;
pub mod pagination;
pub mod resource;
pub mod source;

pub use filter::{FilterState, SearchParams};
pub use resource::{FetchTicket, InvoiceResource, ResourceController, ResourceState};
pub use source::{FetchFailure, InvoiceSource, SharedInvoiceSource};
