//! Trip Bar Component
//!
//! Trip selector and new-trip form. Both end in a full page load.

use leptos::prelude::*;
use trip_sync::{Region, UserIntent};

use crate::commands;
use crate::components::FeedbackLine;
use crate::context::use_app_context;

#[component]
pub fn TripBar() -> impl IntoView {
    let ctx = use_app_context();
    let trips = Memo::new(move |_| {
        ctx.session.with(|s| (s.trips().names().to_vec(), s.trips().selected().to_string()))
    });
    let draft = move || ctx.session.with(|s| s.trips().draft().to_string());

    let create_trip = move || {
        let name = ctx.session.with_untracked(|s| s.trips().draft().to_string());
        commands::send(ctx, UserIntent::CreateTrip(name));
    };

    view! {
        <div class="row g-2 align-items-end">
            <div class="col-md-6">
                <label class="form-label">"Trip"</label>
                <select
                    class="form-select"
                    on:change=move |ev| commands::send(ctx, UserIntent::SelectTrip(event_target_value(&ev)))
                >
                    {move || {
                        let (names, selected) = trips.get();
                        names
                            .into_iter()
                            .map(|name| {
                                let is_selected = name == selected;
                                view! {
                                    <option value=name.clone() selected=is_selected>{name.clone()}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <div class="col-md-6">
                <label class="form-label">"New trip"</label>
                <div class="input-group">
                    <input
                        type="text"
                        class="form-control"
                        placeholder="Trip name"
                        prop:value=draft
                        on:input=move |ev| commands::send(ctx, UserIntent::SetTripDraft(event_target_value(&ev)))
                    />
                    <button type="button" class="btn btn-outline-primary" on:click=move |_| create_trip()>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
        <FeedbackLine region=Region::Trips />
    }
}
