//! Trip List App
//!
//! Trip selector on top, then the active trip's checklist.

use leptos::prelude::*;
use trip_sync::{Region, TripSession};

use crate::components::{EditToggle, FeedbackLine, ItemList, NewItemForm, TripBar};
use crate::context::AppContext;
use crate::page;

#[component]
pub fn App() -> impl IntoView {
    let bootstrap = page::read_bootstrap();
    let origin = page::origin();
    let api_base = bootstrap.config.api_base_or(&origin).to_string();
    log::info!("[app] trip {:?} with {} items", bootstrap.active_trip, bootstrap.items.len());

    let ctx = AppContext::new(TripSession::hydrate(&bootstrap), api_base, bootstrap.config.feedback_ttl_ms);
    provide_context(ctx);

    let active_trip = move || ctx.session.with(|s| s.trip().to_string());

    view! {
        <div class="container py-4">
            <TripBar />

            <div class="d-flex align-items-center justify-content-between mt-4 mb-2">
                <h2 class="h5 mb-0">
                    "Items for " <span class="badge bg-primary">{active_trip}</span>
                </h2>
                <EditToggle />
            </div>

            <NewItemForm />
            <FeedbackLine region=Region::Items />
            <ItemList />
        </div>
    }
}
