//! Item Row Component
//!
//! Checkbox, inline-editable text and delete control of one item.
//! All visual state comes from the session row. Typing is mirrored into the
//! row, and the row's text is written back into the DOM only when they differ.

use leptos::html;
use leptos::prelude::*;
use trip_sync::{ItemId, ItemRow, UserIntent};

use crate::commands;
use crate::context::use_app_context;

fn text_class(row: &ItemRow) -> String {
    let mut c = String::from("item-text");
    if row.editable {
        c.push_str(" border rounded px-2 py-1");
    }
    if row.struck {
        c.push_str(" text-decoration-line-through text-muted");
    }
    c
}

#[component]
pub fn ItemRowView(id: ItemId) -> impl IntoView {
    let ctx = use_app_context();
    let row = Memo::new(move |_| ctx.session.with(|s| s.view().row(id).cloned()));
    let text_ref = NodeRef::<html::Span>::new();

    // Repaint only when the model disagrees with the DOM, so typing keeps the caret
    Effect::new(move |_| {
        if let (Some(el), Some(r)) = (text_ref.get(), row.get()) {
            if el.text_content().as_deref() != Some(r.text.as_str()) {
                el.set_text_content(Some(&r.text));
            }
        }
    });

    let li_class = move || {
        let mut c = String::from("list-group-item d-flex align-items-center justify-content-between");
        if row.get().is_some_and(|r| r.is_pending()) {
            c.push_str(" opacity-75");
        }
        c
    };
    let checked = move || row.get().is_some_and(|r| r.checkbox);
    let editable = move || if row.get().is_some_and(|r| r.editable) { "true" } else { "false" };
    let span_class = move || row.get().map(|r| text_class(&r)).unwrap_or_default();
    let controls_class = move || {
        if row.get().is_some_and(|r| r.delete_visible) {
            "edit-controls"
        } else {
            "edit-controls d-none"
        }
    };

    view! {
        <li class=li_class>
            <div class="d-flex align-items-center gap-2 flex-grow-1">
                <input
                    type="checkbox"
                    class="form-check-input item-check"
                    prop:checked=checked
                    on:change=move |ev| {
                        commands::send(ctx, UserIntent::ToggleChecked { id, checked: event_target_checked(&ev) })
                    }
                />
                <span
                    node_ref=text_ref
                    class=span_class
                    contenteditable=editable
                    on:input=move |ev| {
                        let text = event_target::<web_sys::HtmlElement>(&ev).text_content().unwrap_or_default();
                        commands::send(ctx, UserIntent::EditText { id, text });
                    }
                    on:blur=move |ev| {
                        let text = event_target::<web_sys::HtmlElement>(&ev).text_content().unwrap_or_default();
                        commands::send(ctx, UserIntent::CommitRename { id, text });
                    }
                ></span>
            </div>
            <div class=controls_class>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-danger btn-delete"
                    title="Delete item"
                    on:click=move |_| commands::send(ctx, UserIntent::DeleteItem { id })
                >
                    <i class="bi bi-trash"></i>
                </button>
            </div>
        </li>
    }
}
