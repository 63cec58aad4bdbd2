//! Feedback Line Component
//!
//! Status message of one region; expires after the configured delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use trip_sync::Region;

use crate::context::use_app_context;

#[component]
pub fn FeedbackLine(region: Region) -> impl IntoView {
    let ctx = use_app_context();
    let message = Memo::new(move |_| ctx.session.with(|s| s.feedback().get(region).cloned()));

    if let Some(ttl) = ctx.feedback_ttl_ms {
        let session = ctx.session;
        Effect::new(move |_| {
            let Some(seq) = message.get().map(|m| m.seq) else {
                return;
            };
            spawn_local(async move {
                TimeoutFuture::new(ttl.min(u32::MAX as u64) as u32).await;
                session.update(|s| {
                    s.feedback_mut().clear_if(region, seq);
                });
            });
        });
    }

    let class = move || match message.get() {
        Some(m) => format!("small mt-2 {}", m.tone.class()),
        None => "small mt-2".to_string(),
    };
    let text = move || message.get().map(|m| m.text).unwrap_or_default();

    view! { <div class=class>{text}</div> }
}
