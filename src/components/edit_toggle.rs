//! Edit Toggle Component
//!
//! Pencil button switching the whole list between view and edit mode.

use leptos::prelude::*;
use trip_sync::UserIntent;

use crate::commands;
use crate::context::use_app_context;

#[component]
pub fn EditToggle() -> impl IntoView {
    let ctx = use_app_context();
    let indicator = Memo::new(move |_| ctx.session.with(|s| s.view().indicator().clone()));

    let class = move || {
        if indicator.get().active {
            "btn btn-sm btn-secondary"
        } else {
            "btn btn-sm btn-outline-secondary"
        }
    };

    view! {
        <button
            type="button"
            class=class
            title="Toggle edit mode"
            on:click=move |_| commands::send(ctx, UserIntent::ToggleEditMode)
        >
            <i class="bi bi-pencil"></i>
            " "
            <span>{move || indicator.get().label}</span>
        </button>
    }
}
