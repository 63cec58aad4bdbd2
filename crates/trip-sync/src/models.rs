//! Wire Models
//!
//! Data structures matching the JSON API.

use serde::{Deserialize, Serialize};

pub type ItemId = u32;

/// A checklist entry of one trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    #[serde(default)]
    pub checked: bool,
}

/// Partial update sent with `PATCH /api/items/{trip}/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ItemPatch {
    pub fn checked(checked: bool) -> Self {
        Self { checked: Some(checked), text: None }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self { checked: None, text: Some(text.into()) }
    }
}

// ========================
// Envelopes
// ========================

#[derive(Debug, Deserialize)]
pub(crate) struct TripEnvelope {
    pub trip_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemEnvelope {
    pub item: Item,
}
