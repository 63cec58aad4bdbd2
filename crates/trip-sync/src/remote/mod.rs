//! Remote Client
//!
//! One JSON request per call, no retries. Success payloads are returned as
//! parsed JSON; failures are normalized into [`RemoteError`].

mod http;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

use crate::error::RemoteError;
use crate::models::{Item, ItemEnvelope, ItemId, ItemPatch, TripEnvelope};

pub use http::HttpRemote;

/// Characters left intact by browser `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single path or query component
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// A request against the JSON API, relative to the API base
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn create_trip(trip_name: &str) -> Self {
        Self {
            method: Method::POST,
            path: "/api/trips".to_string(),
            body: Some(json!({ "trip_name": trip_name })),
        }
    }

    pub fn create_item(trip: &str, text: &str) -> Self {
        Self {
            method: Method::POST,
            path: "/api/items".to_string(),
            body: Some(json!({ "trip": trip, "text": text })),
        }
    }

    pub fn update_item(trip: &str, id: ItemId, patch: &ItemPatch) -> Self {
        let mut body = Map::new();
        if let Some(checked) = patch.checked {
            body.insert("checked".to_string(), Value::Bool(checked));
        }
        if let Some(text) = &patch.text {
            body.insert("text".to_string(), Value::String(text.clone()));
        }
        Self {
            method: Method::PATCH,
            path: item_path(trip, id),
            body: Some(Value::Object(body)),
        }
    }

    pub fn delete_item(trip: &str, id: ItemId) -> Self {
        Self {
            method: Method::DELETE,
            path: item_path(trip, id),
            body: None,
        }
    }
}

fn item_path(trip: &str, id: ItemId) -> String {
    format!("/api/items/{}/{}", encode_component(trip), encode_component(&id.to_string()))
}

/// Turn a raw HTTP status and body into the call's result.
///
/// An empty or unparsable body counts as `{}`; any non-2xx status is a failure
/// whatever the body holds.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<Value, RemoteError> {
    let payload = serde_json::from_slice::<Value>(body).unwrap_or_else(|_| Value::Object(Map::new()));
    if (200..300).contains(&status) {
        Ok(payload)
    } else {
        Err(RemoteError::status(status, payload.get("error").and_then(Value::as_str)))
    }
}

fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, RemoteError> {
    serde_json::from_value(payload).map_err(|e| RemoteError::Decode(e.to_string()))
}

/// Transport to the checklist API.
///
/// Only `request` is required; the typed calls are built on top of it.
#[async_trait(?Send)]
pub trait Remote {
    async fn request(&self, request: ApiRequest) -> Result<Value, RemoteError>;

    /// `POST /api/trips`, returns the canonical trip name
    async fn create_trip(&self, trip_name: &str) -> Result<String, RemoteError> {
        let payload = self.request(ApiRequest::create_trip(trip_name)).await?;
        decode::<TripEnvelope>(payload).map(|envelope| envelope.trip_name)
    }

    /// `POST /api/items`, returns the item with its assigned id
    async fn create_item(&self, trip: &str, text: &str) -> Result<Item, RemoteError> {
        let payload = self.request(ApiRequest::create_item(trip, text)).await?;
        decode::<ItemEnvelope>(payload).map(|envelope| envelope.item)
    }

    /// `PATCH /api/items/{trip}/{id}`, returns the canonical item
    async fn update_item(&self, trip: &str, id: ItemId, patch: &ItemPatch) -> Result<Item, RemoteError> {
        let payload = self.request(ApiRequest::update_item(trip, id, patch)).await?;
        decode::<ItemEnvelope>(payload).map(|envelope| envelope.item)
    }

    /// `DELETE /api/items/{trip}/{id}`; the acknowledgement body is ignored
    async fn delete_item(&self, trip: &str, id: ItemId) -> Result<(), RemoteError> {
        self.request(ApiRequest::delete_item(trip, id)).await.map(|_| ())
    }
}
