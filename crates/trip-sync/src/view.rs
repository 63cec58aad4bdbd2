//! List View Model
//!
//! What the renderer shows: one row per item plus the list-level affordances.
//! Rows mirror the registry except while a mutation is in flight.

use crate::edit_mode::{EditMode, ModeIndicator};
use crate::models::{Item, ItemId};

/// Visual state of a single rendered item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: ItemId,
    /// Text currently displayed (may hold an uncommitted inline edit)
    pub text: String,
    /// Last confirmed text; rename snapshots are taken from here
    pub baseline: String,
    /// Value of the checkbox control
    pub checkbox: bool,
    /// Strike-through and muted styling
    pub struck: bool,
    pub editable: bool,
    pub delete_visible: bool,
    /// Requests issued for this row that have not settled yet
    pub in_flight: u32,
    /// Bumped whenever reconciliation rewrites `text`, even to an equal value
    pub text_rev: u32,
}

impl ItemRow {
    pub fn new(item: &Item, mode: EditMode) -> Self {
        let mut row = Self {
            id: item.id,
            text: item.text.clone(),
            baseline: item.text.clone(),
            checkbox: item.checked,
            struck: item.checked,
            editable: false,
            delete_visible: false,
            in_flight: 0,
            text_rev: 0,
        };
        row.apply_mode(mode);
        row
    }

    pub fn apply_mode(&mut self, mode: EditMode) {
        self.editable = mode.is_editing();
        self.delete_visible = mode.is_editing();
    }

    /// Overwrite the displayed text so the renderer repaints it
    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
        self.text_rev = self.text_rev.wrapping_add(1);
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    rows: Vec<ItemRow>,
    indicator: ModeIndicator,
    empty: bool,
    /// Contents of the add-item input
    draft: String,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            indicator: ModeIndicator::default(),
            empty: true,
            draft: String::new(),
        }
    }
}

impl ListView {
    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    pub fn row(&self, id: ItemId) -> Option<&ItemRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub(crate) fn row_mut(&mut self, id: ItemId) -> Option<&mut ItemRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.rows.iter().map(|row| row.id).collect()
    }

    pub fn indicator(&self) -> &ModeIndicator {
        &self.indicator
    }

    /// Whether the empty-state notice is shown
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub(crate) fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub(crate) fn append(&mut self, item: &Item, mode: EditMode) {
        self.rows.push(ItemRow::new(item, mode));
    }

    pub(crate) fn reset(&mut self, items: &[Item], mode: EditMode) {
        self.rows = items.iter().map(|item| ItemRow::new(item, mode)).collect();
    }

    pub(crate) fn remove(&mut self, id: ItemId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    pub(crate) fn refresh_empty_state(&mut self) {
        self.empty = self.rows.is_empty();
    }

    /// Reconfigure the indicator and every row; returns how many rows were touched
    pub(crate) fn apply_mode(&mut self, mode: EditMode) -> usize {
        self.indicator = ModeIndicator::for_mode(mode);
        for row in &mut self.rows {
            row.apply_mode(mode);
        }
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: ItemId, checked: bool) -> Item {
        Item { id, text: format!("Item {}", id), checked }
    }

    #[test]
    fn test_row_reflects_item_and_mode() {
        let row = ItemRow::new(&make_item(1, true), EditMode::Edit);
        assert!(row.checkbox);
        assert!(row.struck);
        assert!(row.editable);
        assert!(row.delete_visible);
        assert_eq!(row.baseline, "Item 1");

        let row = ItemRow::new(&make_item(2, false), EditMode::View);
        assert!(!row.struck);
        assert!(!row.editable);
        assert!(!row.delete_visible);
    }

    #[test]
    fn test_apply_mode_touches_every_row() {
        let mut view = ListView::default();
        view.reset(&[make_item(1, false), make_item(2, true), make_item(3, false)], EditMode::View);

        assert_eq!(view.apply_mode(EditMode::Edit), 3);
        assert!(view.rows().iter().all(|r| r.editable && r.delete_visible));
        assert_eq!(view.indicator().label, "Editing");
    }

    #[test]
    fn test_empty_state_follows_rows() {
        let mut view = ListView::default();
        assert!(view.is_empty());
        view.append(&make_item(1, false), EditMode::View);
        view.refresh_empty_state();
        assert!(!view.is_empty());
        assert!(view.remove(1));
        assert!(!view.remove(1));
        view.refresh_empty_state();
        assert!(view.is_empty());
    }
}
