//! Item Registry
//!
//! Confirmed items of the active trip, in display order.

use crate::error::RegistryError;
use crate::models::{Item, ItemId, ItemPatch};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemRegistry {
    items: Vec<Item>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with server-rendered items, keeping the first of any repeated id
    pub fn seed(&mut self, items: impl IntoIterator<Item = Item>) {
        self.items.clear();
        for item in items {
            if let Err(e) = self.add(item) {
                log::warn!("[registry] seed skipped: {}", e);
            }
        }
    }

    pub fn add(&mut self, item: Item) -> Result<(), RegistryError> {
        if self.get(item.id).is_some() {
            return Err(RegistryError::Duplicate(item.id));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Apply the present fields of `patch`, returning the updated item
    pub fn update(&mut self, id: ItemId, patch: &ItemPatch) -> Result<&Item, RegistryError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(RegistryError::NotFound(id))?;
        if let Some(checked) = patch.checked {
            item.checked = checked;
        }
        if let Some(text) = &patch.text {
            item.text = text.clone();
        }
        Ok(item)
    }

    pub fn remove(&mut self, id: ItemId) -> Result<Item, RegistryError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(RegistryError::NotFound(id))?;
        Ok(self.items.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}
