use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error};

use crate::db::Invoice;
use crate::invoices::filter::FilterState;
use crate::invoices::source::{FetchFailure, SharedInvoiceSource};

/// What the view should render for the current filter
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceState<T> {
    /// A fetch for the latest filter has started and not settled yet
    Pending,
    Resolved(T),
    Rejected(FetchFailure),
}

impl<T> ResourceState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, ResourceState::Pending)
    }

    pub fn resolved(&self) -> Option<&T> {
        match self {
            ResourceState::Resolved(value) => Some(value),
            _ => None,
        }
    }

    pub fn rejected(&self) -> Option<&FetchFailure> {
        match self {
            ResourceState::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

/// Receipt for a fetch started by [`ResourceController::observe`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    filter: FilterState,
    generation: u64,
}

impl FetchTicket {
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Bookkeeping for "which filter is authoritative" and "what is reported".
///
/// Each observed change of filter bumps the generation. An outcome is only
/// applied when its ticket carries the current generation, so a slow fetch
/// for an old filter can never overwrite the state of a newer one.
#[derive(Debug)]
pub struct ResourceController<T> {
    latest: Option<FilterState>,
    generation: u64,
    state: ResourceState<T>,
}

impl<T> Default for ResourceController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResourceController<T> {
    pub fn new() -> Self {
        ResourceController {
            latest: None,
            generation: 0,
            state: ResourceState::Pending,
        }
    }

    pub fn state(&self) -> &ResourceState<T> {
        &self.state
    }

    /// The filter of the most recent fetch, if any
    pub fn latest(&self) -> Option<&FilterState> {
        self.latest.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Record `filter` as the current one.
    ///
    /// Returns a ticket when a fetch must start (first observation, or a
    /// filter different from the last one); the state is `Pending` from
    /// then on. Returns `None` when the filter is unchanged.
    pub fn observe(&mut self, filter: &FilterState) -> Option<FetchTicket> {
        if self.latest.as_ref() == Some(filter) {
            return None;
        }

        self.generation += 1;
        self.latest = Some(filter.clone());
        self.state = ResourceState::Pending;

        Some(FetchTicket {
            filter: filter.clone(),
            generation: self.generation,
        })
    }

    /// Apply the outcome of the fetch behind `ticket`.
    ///
    /// Returns `true` if the reported state changed. Outcomes of superseded
    /// tickets are dropped without a trace beyond a debug log.
    pub fn settle(&mut self, ticket: &FetchTicket, outcome: Result<T, FetchFailure>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                query = %ticket.filter.query(),
                page = ticket.filter.page(),
                "Discarding result of superseded invoice fetch"
            );
            return false;
        }
        if !self.state.is_pending() {
            return false;
        }

        self.state = match outcome {
            Ok(value) => ResourceState::Resolved(value),
            Err(err) => {
                error!(
                    query = %ticket.filter.query(),
                    page = ticket.filter.page(),
                    "Invoice fetch failed: {}",
                    err
                );
                ResourceState::Rejected(err)
            }
        };
        true
    }
}

/// The invoices list for whatever filter was observed last.
///
/// Fetches run as tokio tasks against the shared source. Every state change
/// is published on a watch channel so a view can follow along.
#[derive(Clone)]
pub struct InvoiceResource {
    source: SharedInvoiceSource,
    controller: Arc<watch::Sender<ResourceController<Vec<Invoice>>>>,
}

impl InvoiceResource {
    pub fn new(source: SharedInvoiceSource) -> Self {
        let (controller, _) = watch::channel(ResourceController::new());
        InvoiceResource {
            source,
            controller: Arc::new(controller),
        }
    }

    /// Make `filter` the current filter and report the resulting state.
    ///
    /// Must be called from within a tokio runtime when the filter changed,
    /// since that starts a fetch task.
    pub fn observe(&self, filter: &FilterState) -> ResourceState<Vec<Invoice>> {
        let mut ticket = None;
        self.controller.send_if_modified(|controller| {
            ticket = controller.observe(filter);
            ticket.is_some()
        });

        if let Some(ticket) = ticket {
            debug!(
                query = %filter.query(),
                page = filter.page(),
                generation = ticket.generation(),
                "Starting invoice fetch"
            );
            self.spawn_fetch(ticket);
        }

        self.state()
    }

    pub fn state(&self) -> ResourceState<Vec<Invoice>> {
        self.controller.borrow().state().clone()
    }

    /// Follow controller changes; the receiver starts out marked as seen
    pub fn subscribe(&self) -> watch::Receiver<ResourceController<Vec<Invoice>>> {
        self.controller.subscribe()
    }

    fn spawn_fetch(&self, ticket: FetchTicket) {
        let source = self.source.clone();
        let controller = self.controller.clone();

        tokio::spawn(async move {
            let filter = ticket.filter();
            let outcome = source
                .fetch_filtered_invoices(filter.query(), filter.page())
                .await;
            controller.send_if_modified(|controller| controller.settle(&ticket, outcome));
        });
    }
}
