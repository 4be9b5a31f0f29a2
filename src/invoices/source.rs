use std::sync::Arc;

use thiserror::Error;

use crate::db::{Database, Invoice, ITEMS_PER_PAGE};

/// Any failure of the invoice data source (storage, network, decoding).
///
/// Callers never branch on the cause, so only the message is kept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to fetch invoices: {message}")]
pub struct FetchFailure {
    message: String,
}

impl FetchFailure {
    pub fn new(message: impl Into<String>) -> Self {
        FetchFailure {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<sqlx::Error> for FetchFailure {
    fn from(err: sqlx::Error) -> Self {
        FetchFailure::new(err.to_string())
    }
}

/// Where the dashboard reads invoices from (allows mocking for tests)
#[async_trait::async_trait]
pub trait InvoiceSource: Send + Sync {
    /// One page of invoices matching `query`, in display order
    async fn fetch_filtered_invoices(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Vec<Invoice>, FetchFailure>;

    /// Number of pages available for `query`
    async fn fetch_invoice_pages(&self, query: &str) -> Result<u32, FetchFailure>;
}

pub type SharedInvoiceSource = Arc<dyn InvoiceSource>;

#[async_trait::async_trait]
impl InvoiceSource for Database {
    async fn fetch_filtered_invoices(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Vec<Invoice>, FetchFailure> {
        Ok(Database::fetch_filtered_invoices(self, query, page).await?)
    }

    async fn fetch_invoice_pages(&self, query: &str) -> Result<u32, FetchFailure> {
        let count = self.count_filtered_invoices(query).await?;
        Ok(page_count(count))
    }
}

/// Pages needed to show `count` invoices, `ITEMS_PER_PAGE` at a time
pub fn page_count(count: i64) -> u32 {
    let count = u32::try_from(count.max(0)).unwrap_or(u32::MAX);
    count.div_ceil(ITEMS_PER_PAGE)
}
