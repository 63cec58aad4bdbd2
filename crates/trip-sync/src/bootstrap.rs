//! Bootstrap Document
//!
//! Initial state the server renders into the page: the active trip, the
//! known trips and the active trip's items.

use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::ConfigError;
use crate::models::Item;
use crate::pipeline::DEFAULT_TRIP;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bootstrap {
    pub active_trip: String,
    #[serde(default)]
    pub trips: Vec<String>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub config: ClientConfig,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self {
            active_trip: DEFAULT_TRIP.to_string(),
            trips: vec![DEFAULT_TRIP.to_string()],
            items: Vec::new(),
            config: ClientConfig::default(),
        }
    }
}

impl Bootstrap {
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse, falling back to an empty default trip
    pub fn parse_or_default(json: Option<&str>) -> Self {
        match json.map(Self::parse) {
            Some(Ok(bootstrap)) => bootstrap,
            Some(Err(e)) => {
                log::warn!("[bootstrap] {}", e);
                Self::default()
            }
            None => {
                log::warn!("[bootstrap] no bootstrap document on the page");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit_mode::EditMode;
    use crate::pipeline::TripSession;

    const PAGE: &str = r#"{
        "active_trip": "Weekend",
        "trips": ["Default Trip", "Weekend"],
        "items": [
            {"id": 1, "text": "milk", "checked": false},
            {"id": 2, "text": "eggs", "checked": true, "created_at": "2024-05-01T10:00:00"}
        ],
        "config": {"page_path": "/list"}
    }"#;

    #[test]
    fn test_hydrate_renders_items_in_view_mode() {
        let bootstrap = Bootstrap::parse(PAGE).unwrap();
        let session = TripSession::hydrate(&bootstrap);

        assert_eq!(session.trip(), "Weekend");
        assert_eq!(session.mode(), EditMode::View);
        assert_eq!(session.registry().len(), 2);
        assert_eq!(session.view().ids(), vec![1, 2]);
        assert!(!session.view().is_empty());
        assert!(session.view().rows().iter().all(|r| !r.editable && !r.delete_visible));
        assert!(session.view().row(2).unwrap().struck);
        assert_eq!(session.trips().page_path(), "/list");
        assert_eq!(session.view().indicator().label, "Edit");
    }

    #[test]
    fn test_invalid_document_falls_back_to_default_trip() {
        let bootstrap = Bootstrap::parse_or_default(Some("{not json"));
        assert_eq!(bootstrap, Bootstrap::default());

        let session = TripSession::hydrate(&Bootstrap::parse_or_default(None));
        assert_eq!(session.trip(), "Default Trip");
        assert!(session.view().is_empty());
    }
}
