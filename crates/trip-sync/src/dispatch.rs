//! Intent Dispatch
//!
//! Routes structured user intents through the pipeline. The session is only
//! borrowed inside the synchronous prepare/settle steps, never across a call.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{ItemId, ItemPatch};
use crate::pipeline::TripSession;
use crate::remote::Remote;
use crate::trips::Navigation;

/// What the user did, independent of how it was rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    /// Typing in the add-item input
    SetDraft(String),
    AddItem(String),
    ToggleChecked { id: ItemId, checked: bool },
    /// Typing inside an editable item text
    EditText { id: ItemId, text: String },
    /// The editable text lost focus
    CommitRename { id: ItemId, text: String },
    DeleteItem { id: ItemId },
    ToggleEditMode,
    SetTripDraft(String),
    CreateTrip(String),
    SelectTrip(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Changes local state only
    Local,
    Add,
    Toggle,
    Rename,
    Delete,
    CreateTrip,
    Navigate,
}

impl UserIntent {
    pub fn kind(&self) -> ActionKind {
        match self {
            UserIntent::SetDraft(_)
            | UserIntent::EditText { .. }
            | UserIntent::ToggleEditMode
            | UserIntent::SetTripDraft(_) => ActionKind::Local,
            UserIntent::AddItem(_) => ActionKind::Add,
            UserIntent::ToggleChecked { .. } => ActionKind::Toggle,
            UserIntent::CommitRename { .. } => ActionKind::Rename,
            UserIntent::DeleteItem { .. } => ActionKind::Delete,
            UserIntent::CreateTrip(_) => ActionKind::CreateTrip,
            UserIntent::SelectTrip(_) => ActionKind::Navigate,
        }
    }
}

/// Shared access to the session from event handlers
pub trait SessionHandle {
    fn with_session<R>(&self, f: impl FnOnce(&mut TripSession) -> R) -> R;
}

impl SessionHandle for RefCell<TripSession> {
    fn with_session<R>(&self, f: impl FnOnce(&mut TripSession) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}

impl<H: SessionHandle> SessionHandle for Rc<H> {
    fn with_session<R>(&self, f: impl FnOnce(&mut TripSession) -> R) -> R {
        (**self).with_session(f)
    }
}

/// Run one intent to completion; trip flows may ask for a page navigation
pub async fn dispatch<H, R>(handle: &H, remote: &R, intent: UserIntent) -> Option<Navigation>
where
    H: SessionHandle,
    R: Remote,
{
    let intent = dispatch_local(handle, intent)?;
    log::debug!("[dispatch] {:?} {:?}", intent.kind(), intent);
    match intent {
        UserIntent::AddItem(raw) => {
            let Ok(pending) = handle.with_session(|s| s.prepare_add(&raw)) else {
                return None;
            };
            let outcome = remote.create_item(&pending.trip, &pending.text).await;
            handle.with_session(|s| s.settle_add(pending, outcome));
            None
        }
        UserIntent::ToggleChecked { id, checked } => {
            let pending = handle.with_session(|s| s.prepare_toggle(id, checked))?;
            let outcome = remote
                .update_item(&pending.trip, pending.id, &ItemPatch::checked(pending.attempted))
                .await;
            handle.with_session(|s| s.settle_toggle(pending, outcome));
            None
        }
        UserIntent::CommitRename { id, text } => {
            let pending = handle.with_session(|s| s.prepare_rename(id, &text))?;
            let outcome = remote
                .update_item(&pending.trip, pending.id, &ItemPatch::text(pending.text.clone()))
                .await;
            handle.with_session(|s| s.settle_rename(pending, outcome));
            None
        }
        UserIntent::DeleteItem { id } => {
            let pending = handle.with_session(|s| s.prepare_delete(id))?;
            let outcome = remote.delete_item(&pending.trip, pending.id).await;
            handle.with_session(|s| s.settle_delete(pending, outcome));
            None
        }
        UserIntent::CreateTrip(raw) => {
            let Ok(pending) = handle.with_session(|s| s.prepare_create_trip(&raw)) else {
                return None;
            };
            let outcome = remote.create_trip(&pending.name).await;
            handle.with_session(|s| s.settle_create_trip(pending, outcome))
        }
        UserIntent::SelectTrip(name) => Some(handle.with_session(|s| s.select_trip(&name))),
        UserIntent::SetDraft(_)
        | UserIntent::EditText { .. }
        | UserIntent::ToggleEditMode
        | UserIntent::SetTripDraft(_) => None,
    }
}

/// Apply an intent that needs no remote call; any other intent is handed back
pub fn dispatch_local<H: SessionHandle>(handle: &H, intent: UserIntent) -> Option<UserIntent> {
    match intent {
        UserIntent::SetDraft(text) => handle.with_session(|s| s.set_draft(text)),
        UserIntent::EditText { id, text } => handle.with_session(|s| s.edit_text(id, text)),
        UserIntent::ToggleEditMode => {
            handle.with_session(|s| s.toggle_edit_mode());
        }
        UserIntent::SetTripDraft(text) => handle.with_session(|s| s.set_trip_draft(text)),
        other => return Some(other),
    }
    None
}
