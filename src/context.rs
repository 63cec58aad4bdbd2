//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use trip_sync::{HttpRemote, TripSession};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The whole checklist state of the active trip
    pub session: RwSignal<TripSession>,
    /// Client for the JSON API, shared by every intent
    remote: StoredValue<HttpRemote, LocalStorage>,
    /// Lifetime of feedback lines, if they expire
    pub feedback_ttl_ms: Option<u64>,
}

impl AppContext {
    pub fn new(session: TripSession, api_base: String, feedback_ttl_ms: Option<u64>) -> Self {
        Self {
            session: RwSignal::new(session),
            remote: StoredValue::new_local(HttpRemote::new(api_base)),
            feedback_ttl_ms,
        }
    }

    pub fn remote(&self) -> HttpRemote {
        self.remote.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
