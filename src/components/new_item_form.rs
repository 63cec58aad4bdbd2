//! New Item Form Component
//!
//! Text input plus Add button; Enter also submits.

use leptos::prelude::*;
use trip_sync::UserIntent;

use crate::commands;
use crate::context::use_app_context;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let draft = move || ctx.session.with(|s| s.view().draft().to_string());

    let add_item = move || {
        let text = ctx.session.with_untracked(|s| s.view().draft().to_string());
        commands::send(ctx, UserIntent::AddItem(text));
    };

    view! {
        <div class="input-group">
            <input
                type="text"
                class="form-control"
                placeholder="Add an item..."
                prop:value=draft
                on:input=move |ev| commands::send(ctx, UserIntent::SetDraft(event_target_value(&ev)))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        add_item();
                    }
                }
            />
            <button type="button" class="btn btn-primary" on:click=move |_| add_item()>
                "Add"
            </button>
        </div>
    }
}
