// Test support utilities for both unit and integration tests

use crate::db::Invoice;
use crate::invoices::{FetchFailure, FilterState, InvoiceSource};
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::oneshot;

type Outcome = Result<Vec<Invoice>, FetchFailure>;

/// Invoice source whose fetches only settle when the test says so
///
/// Every call to `fetch_filtered_invoices` is recorded and then parks until
/// [`ScriptedInvoiceSource::resolve`] or [`ScriptedInvoiceSource::reject`] is
/// called for its filter. This lets tests settle fetches in any order.
#[derive(Default)]
pub struct ScriptedInvoiceSource {
    calls: Mutex<Vec<FilterState>>,
    waiting: Mutex<HashMap<FilterState, Vec<oneshot::Sender<Outcome>>>>,
    pages: Mutex<HashMap<String, u32>>,
}

impl ScriptedInvoiceSource {
    #[allow(unused)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }

    /// Every filter fetched so far, in call order
    pub fn calls(&self) -> Vec<FilterState> {
        self.calls.lock().unwrap().clone()
    }

    /// Yield to the runtime until at least `count` fetches have been made
    pub async fn wait_for_calls(&self, count: usize) {
        for _ in 0..1000 {
            if self.calls.lock().unwrap().len() >= count {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!(
            "Expected {} fetches, saw {:?}",
            count,
            self.calls.lock().unwrap()
        );
    }

    /// Settle the oldest outstanding fetch for `filter` with `invoices`
    pub async fn resolve(&self, filter: &FilterState, invoices: Vec<Invoice>) {
        self.settle(filter, Ok(invoices)).await;
    }

    /// Fail the oldest outstanding fetch for `filter`
    pub async fn reject(&self, filter: &FilterState, failure: FetchFailure) {
        self.settle(filter, Err(failure)).await;
    }

    /// Page count reported for `query`; unknown queries report one page
    pub fn set_pages(&self, query: &str, pages: u32) {
        self.pages.lock().unwrap().insert(query.to_string(), pages);
    }

    async fn settle(&self, filter: &FilterState, outcome: Outcome) {
        for _ in 0..1000 {
            let sender = {
                let mut waiting = self.waiting.lock().unwrap();
                waiting.get_mut(filter).and_then(|senders| {
                    if senders.is_empty() {
                        None
                    } else {
                        Some(senders.remove(0))
                    }
                })
            };
            if let Some(sender) = sender {
                let _ = sender.send(outcome);
                // Let the fetch task observe the outcome
                for _ in 0..10 {
                    tokio::task::yield_now().await;
                }
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("No outstanding fetch for {:?}", filter);
    }
}

#[async_trait::async_trait]
impl InvoiceSource for ScriptedInvoiceSource {
    async fn fetch_filtered_invoices(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Vec<Invoice>, FetchFailure> {
        let filter = FilterState::new(query, page);
        let (tx, rx) = oneshot::channel();
        self.calls.lock().unwrap().push(filter.clone());
        self.waiting
            .lock()
            .unwrap()
            .entry(filter)
            .or_default()
            .push(tx);

        rx.await
            .unwrap_or_else(|_| Err(FetchFailure::new("fetch abandoned by test")))
    }

    async fn fetch_invoice_pages(&self, query: &str) -> Result<u32, FetchFailure> {
        Ok(self.pages.lock().unwrap().get(query).copied().unwrap_or(1))
    }
}

/// An invoice with plausible values, identified by `id`
pub fn sample_invoice(id: &str, customer_name: &str) -> Invoice {
    Invoice {
        id: id.to_string(),
        customer_name: customer_name.to_string(),
        email: format!("{}@example.com", id),
        amount_cents: 15795,
        due_date: chrono::NaiveDate::from_ymd_opt(2022, 12, 6).unwrap_or_default(),
        status: crate::db::InvoiceStatus::Pending,
        image_url: format!("/customers/{}.png", id),
    }
}
