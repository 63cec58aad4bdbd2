//! Intent Commands
//!
//! Frontend bindings from DOM events to the sync core.

use leptos::prelude::*;
use leptos::task::spawn_local;
use trip_sync::{dispatch, dispatch_local, SessionHandle, TripSession, UserIntent};

use crate::context::AppContext;
use crate::page;

/// Session handle backed by the context signal; writes notify the view
#[derive(Clone, Copy)]
pub struct SignalSession(pub RwSignal<TripSession>);

impl SessionHandle for SignalSession {
    fn with_session<R>(&self, f: impl FnOnce(&mut TripSession) -> R) -> R {
        let mut guard = self.0.write();
        f(&mut *guard)
    }
}

/// Apply local intents right away, run the rest in the background.
/// Trip flows may end in a page reload.
pub fn send(ctx: AppContext, intent: UserIntent) {
    let handle = SignalSession(ctx.session);
    let Some(intent) = dispatch_local(&handle, intent) else {
        return;
    };
    let remote = ctx.remote();
    spawn_local(async move {
        if let Some(nav) = dispatch(&handle, &remote, intent).await {
            page::navigate(&nav);
        }
    });
}
