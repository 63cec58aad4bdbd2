//! Mutation Pipeline
//!
//! Every flow is validate -> optimistic apply -> remote call -> reconcile.
//! `prepare_*` covers the first two steps and returns an intent describing the
//! call; `settle_*` consumes the intent together with the call's outcome. No
//! session state is borrowed while a call is in flight, so flows on the same
//! item may interleave and settle in response order.


use crate::bootstrap::Bootstrap;
use crate::config::ClientConfig;
use crate::edit_mode::{EditMode, EditModeController};
use crate::error::{RemoteError, ValidationError};
use crate::feedback::{FeedbackBoard, Region};
use crate::models::{Item, ItemId, ItemPatch};
use crate::registry::ItemRegistry;
use crate::trips::TripSelector;
use crate::view::ListView;

pub const DEFAULT_TRIP: &str = "Default Trip";

/// Pending `POST /api/items`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddIntent {
    pub trip: String,
    pub text: String,
}

/// Pending `PATCH {checked}`; `attempted` is the value the user clicked to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleIntent {
    pub trip: String,
    pub id: ItemId,
    pub attempted: bool,
}

/// Pending `PATCH {text}`; `snapshot` is restored if the call fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameIntent {
    pub trip: String,
    pub id: ItemId,
    pub text: String,
    pub snapshot: String,
}

/// Pending `DELETE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteIntent {
    pub trip: String,
    pub id: ItemId,
}

/// Everything the page shows for the active trip
#[derive(Debug, Clone, PartialEq)]
pub struct TripSession {
    trip: String,
    registry: ItemRegistry,
    view: ListView,
    mode: EditModeController,
    pub(crate) feedback: FeedbackBoard,
    pub(crate) trips: TripSelector,
}

impl TripSession {
    pub fn new(trip: impl Into<String>) -> Self {
        let trip = trip.into();
        Self {
            trips: TripSelector::new(vec![trip.clone()], trip.clone(), ClientConfig::default().page_path),
            trip,
            registry: ItemRegistry::new(),
            view: ListView::default(),
            mode: EditModeController::new(),
            feedback: FeedbackBoard::default(),
        }
    }

    /// Build the session from the server-rendered initial state
    pub fn hydrate(bootstrap: &Bootstrap) -> Self {
        let trip = bootstrap.active_trip.clone();
        let mut session = Self::new(trip.clone());
        session.trips = TripSelector::new(bootstrap.trips.clone(), trip, bootstrap.config.page_path.clone());
        session.registry.seed(bootstrap.items.iter().cloned());
        let items: Vec<Item> = session.registry.iter().cloned().collect();
        session.view.reset(&items, session.mode.mode());
        session.view.apply_mode(session.mode.mode());
        session.view.refresh_empty_state();
        session
    }

    pub fn trip(&self) -> &str {
        &self.trip
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub fn mode(&self) -> EditMode {
        self.mode.mode()
    }

    pub fn feedback(&self) -> &FeedbackBoard {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut FeedbackBoard {
        &mut self.feedback
    }

    pub fn trips(&self) -> &TripSelector {
        &self.trips
    }

    /// Flip Edit Mode and reconfigure every row; returns the number of rows touched
    pub fn toggle_edit_mode(&mut self) -> usize {
        let mode = self.mode.toggle();
        log::debug!("[pipeline] edit mode -> {:?}", mode);
        self.view.apply_mode(mode)
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.view.set_draft(text);
    }

    /// Mirror in-progress typing of an editable row
    pub fn edit_text(&mut self, id: ItemId, text: impl Into<String>) {
        if let Some(row) = self.view.row_mut(id).filter(|row| row.editable) {
            row.text = text.into();
        }
    }

    // ========================
    // Add
    // ========================

    pub fn prepare_add(&mut self, raw: &str) -> Result<AddIntent, ValidationError> {
        self.feedback.clear(Region::Items);
        let text = raw.trim();
        if text.is_empty() {
            let err = ValidationError::EmptyItemText;
            self.feedback.err(Region::Items, err.to_string());
            return Err(err);
        }
        Ok(AddIntent { trip: self.trip.clone(), text: text.to_string() })
    }

    pub fn settle_add(&mut self, intent: AddIntent, outcome: Result<Item, RemoteError>) {
        match outcome {
            Ok(item) => match self.registry.add(item.clone()) {
                Ok(()) => {
                    self.view.append(&item, self.mode.mode());
                    self.view.set_draft(String::new());
                    self.feedback.ok(Region::Items, "Item added.");
                }
                Err(e) => {
                    log::warn!("[pipeline] add of {:?} confirmed but not listed: {}", intent.text, e);
                    self.feedback.err(Region::Items, e.to_string());
                }
            },
            Err(e) => {
                log::warn!("[pipeline] add of {:?} failed: {}", intent.text, e);
                self.feedback.err(Region::Items, e.to_string());
            }
        }
        self.view.refresh_empty_state();
    }

    // ========================
    // Toggle checked
    // ========================

    pub fn prepare_toggle(&mut self, id: ItemId, checked: bool) -> Option<ToggleIntent> {
        let row = self.view.row_mut(id)?;
        row.checkbox = checked;
        row.in_flight += 1;
        Some(ToggleIntent { trip: self.trip.clone(), id, attempted: checked })
    }

    pub fn settle_toggle(&mut self, intent: ToggleIntent, outcome: Result<Item, RemoteError>) {
        match outcome {
            Ok(item) => {
                if let Err(e) = self.registry.update(intent.id, &ItemPatch::checked(item.checked)) {
                    log::warn!("[pipeline] toggle confirmed for unlisted item: {}", e);
                }
                if let Some(row) = self.settle_row(intent.id) {
                    row.checkbox = item.checked;
                    row.struck = item.checked;
                }
            }
            Err(e) => {
                log::warn!("[pipeline] toggle of item {} failed: {}", intent.id, e);
                if let Some(row) = self.settle_row(intent.id) {
                    row.checkbox = !intent.attempted;
                }
                self.feedback.err(Region::Items, e.to_string());
            }
        }
    }

    // ========================
    // Rename
    // ========================

    /// Commit of an inline edit (the text region lost focus)
    pub fn prepare_rename(&mut self, id: ItemId, raw: &str) -> Option<RenameIntent> {
        if !self.mode.is_editing() {
            return None;
        }
        let trip = self.trip.clone();
        let row = self.view.row_mut(id)?;
        let snapshot = row.baseline.clone();
        let text = raw.trim();
        if text.is_empty() || text == snapshot {
            row.set_text(snapshot);
            return None;
        }
        row.set_text(text.to_string());
        row.in_flight += 1;
        Some(RenameIntent { trip, id, text: text.to_string(), snapshot })
    }

    pub fn settle_rename(&mut self, intent: RenameIntent, outcome: Result<Item, RemoteError>) {
        match outcome {
            Ok(item) => {
                if let Err(e) = self.registry.update(intent.id, &ItemPatch::text(item.text.clone())) {
                    log::warn!("[pipeline] rename confirmed for unlisted item: {}", e);
                }
                if let Some(row) = self.settle_row(intent.id) {
                    row.baseline = item.text.clone();
                    row.set_text(item.text);
                }
                self.feedback.ok(Region::Items, "Item updated.");
            }
            Err(e) => {
                log::warn!("[pipeline] rename of item {} failed: {}", intent.id, e);
                if let Some(row) = self.settle_row(intent.id) {
                    row.set_text(intent.snapshot);
                }
                self.feedback.err(Region::Items, e.to_string());
            }
        }
    }

    // ========================
    // Delete
    // ========================

    pub fn prepare_delete(&mut self, id: ItemId) -> Option<DeleteIntent> {
        let row = self.view.row_mut(id)?;
        row.in_flight += 1;
        Some(DeleteIntent { trip: self.trip.clone(), id })
    }

    pub fn settle_delete(&mut self, intent: DeleteIntent, outcome: Result<(), RemoteError>) {
        match outcome {
            Ok(()) => {
                if let Err(e) = self.registry.remove(intent.id) {
                    log::warn!("[pipeline] delete confirmed for unlisted item: {}", e);
                }
                self.view.remove(intent.id);
                self.feedback.ok(Region::Items, "Item deleted.");
                self.view.refresh_empty_state();
            }
            Err(e) => {
                log::warn!("[pipeline] delete of item {} failed: {}", intent.id, e);
                self.settle_row(intent.id);
                self.feedback.err(Region::Items, e.to_string());
            }
        }
    }

    /// The row a response belongs to, with its in-flight count released
    fn settle_row(&mut self, id: ItemId) -> Option<&mut crate::view::ItemRow> {
        let row = self.view.row_mut(id)?;
        row.in_flight = row.in_flight.saturating_sub(1);
        Some(row)
    }
}

impl Default for TripSession {
    fn default() -> Self {
        Self::new(DEFAULT_TRIP)
    }
}
