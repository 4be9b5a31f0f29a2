mod client;
mod models;

pub use client::{Database, ITEMS_PER_PAGE};
pub use models::*;
