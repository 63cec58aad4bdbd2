//! Item List Component
//!
//! One row per item, keyed by id, plus the empty-state notice.

use leptos::prelude::*;

use crate::components::ItemRowView;
use crate::context::use_app_context;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_app_context();
    let ids = move || ctx.session.with(|s| s.view().ids());
    let empty_class = move || {
        if ctx.session.with(|s| s.view().is_empty()) {
            "text-muted mt-3"
        } else {
            "text-muted mt-3 d-none"
        }
    };

    view! {
        <ul class="list-group mt-3">
            <For
                each=ids
                key=|id| *id
                children=move |id| view! { <ItemRowView id=id /> }
            />
        </ul>
        <p class=empty_class>"No items yet."</p>
    }
}
