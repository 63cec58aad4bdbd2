//! Trip Checklist Sync Core
//!
//! Rendering-agnostic state for a trip-scoped checklist:
//! - remote: JSON API client and response normalization
//! - registry: confirmed items of the active trip
//! - edit_mode / view: interaction mode and the rendered-row model
//! - pipeline: optimistic apply + reconcile for add/toggle/rename/delete
//! - dispatch: routes user intents through the pipeline

mod error;
mod models;
mod registry;
mod edit_mode;
mod view;
mod feedback;
mod pipeline;
mod trips;
mod dispatch;
mod bootstrap;
mod config;
pub mod remote;

#[cfg(test)]
mod testing;

pub use error::{RegistryError, RemoteError, ValidationError, ConfigError};
pub use models::{Item, ItemId, ItemPatch};
pub use registry::ItemRegistry;
pub use edit_mode::{EditMode, EditModeController, ModeIndicator};
pub use view::{ItemRow, ListView};
pub use feedback::{FeedbackBoard, Message, Region, Tone};
pub use pipeline::{AddIntent, DeleteIntent, RenameIntent, ToggleIntent, TripSession};
pub use trips::{CreateTripIntent, Navigation, TripSelector};
pub use dispatch::{dispatch, dispatch_local, ActionKind, SessionHandle, UserIntent};
pub use bootstrap::Bootstrap;
pub use config::ClientConfig;
pub use remote::{ApiRequest, HttpRemote, Remote};
