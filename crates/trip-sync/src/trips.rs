//! Trip Selection
//!
//! Switching trips is a full page navigation keyed by the `trip` query
//! parameter; creating one posts to the API and then navigates to it.

use crate::error::{RemoteError, ValidationError};
use crate::feedback::Region;
use crate::pipeline::TripSession;
use crate::remote::encode_component;

/// A full page load the renderer should perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub url: String,
}

impl Navigation {
    pub fn to_trip(page_path: &str, trip: &str) -> Self {
        Self { url: format!("{}?trip={}", page_path, encode_component(trip)) }
    }
}

/// Pending `POST /api/trips`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTripIntent {
    pub name: String,
}

/// Known trips, the selected one, and the new-trip input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripSelector {
    names: Vec<String>,
    selected: String,
    draft: String,
    page_path: String,
}

impl TripSelector {
    pub fn new(names: Vec<String>, selected: String, page_path: String) -> Self {
        let mut selector = Self { names: Vec::new(), selected, draft: String::new(), page_path };
        for name in names {
            selector.insert(name);
        }
        let selected = selector.selected.clone();
        selector.insert(selected);
        selector
    }

    /// Trip names in display order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn page_path(&self) -> &str {
        &self.page_path
    }

    fn insert(&mut self, name: String) {
        if let Err(index) = self.names.binary_search(&name) {
            self.names.insert(index, name);
        }
    }
}

impl TripSession {
    pub fn set_trip_draft(&mut self, text: impl Into<String>) {
        self.trips.draft = text.into();
    }

    /// Switch trips by reloading the page for `name`
    pub fn select_trip(&mut self, name: &str) -> Navigation {
        self.trips.selected = name.to_string();
        Navigation::to_trip(&self.trips.page_path, name)
    }

    pub fn prepare_create_trip(&mut self, raw: &str) -> Result<CreateTripIntent, ValidationError> {
        self.feedback.clear(Region::Trips);
        let name = raw.trim();
        if name.is_empty() {
            let err = ValidationError::EmptyTripName;
            self.feedback.err(Region::Trips, err.to_string());
            return Err(err);
        }
        Ok(CreateTripIntent { name: name.to_string() })
    }

    /// On success the new trip is listed, selected, and navigated to
    pub fn settle_create_trip(
        &mut self,
        intent: CreateTripIntent,
        outcome: Result<String, RemoteError>,
    ) -> Option<Navigation> {
        match outcome {
            Ok(name) => {
                self.trips.insert(name.clone());
                self.trips.selected = name.clone();
                self.trips.draft.clear();
                self.feedback.ok(Region::Trips, format!("Trip created: {}", name));
                Some(Navigation::to_trip(&self.trips.page_path, &name))
            }
            Err(e) => {
                log::warn!("[trips] create {:?} failed: {}", intent.name, e);
                self.feedback.err(Region::Trips, e.to_string());
                None
            }
        }
    }
}
