use crate::db::Invoice;
use crate::invoices::{FilterState, InvoiceResource, ResourceState};
use crate::ui::components::use_invoice_source;
use dioxus::prelude::*;

/// Track `filter` and expose the invoices for it.
///
/// Every change of the memoized filter is handed to an [`InvoiceResource`];
/// its state changes are mirrored into a signal the view can match on.
/// Results of superseded filters never reach the signal.
pub fn use_invoice_resource(
    filter: Memo<FilterState>,
) -> ReadSignal<ResourceState<Vec<Invoice>>> {
    let source = use_invoice_source();
    let resource = use_hook(|| InvoiceResource::new(source));
    let mut state = use_signal(|| ResourceState::Pending);

    use_hook(|| {
        let mut updates = resource.subscribe();
        spawn(async move {
            while updates.changed().await.is_ok() {
                let next = updates.borrow_and_update().state().clone();
                state.set(next);
            }
        });
    });

    use_effect(move || {
        let filter = filter();
        state.set(resource.observe(&filter));
    });

    state.into()
}
