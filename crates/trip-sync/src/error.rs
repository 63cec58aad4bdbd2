//! Error Types
//!
//! The `Display` of each error is the message shown to the user.

use crate::models::ItemId;

/// Failure of a single remote call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RemoteError {
    /// Non-success HTTP status; `message` is the payload's `error` field or a generic one
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never produced a response
    #[error("{0}")]
    Transport(String),
    /// Success status but the payload lacked the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl RemoteError {
    pub fn status(status: u16, error_field: Option<&str>) -> Self {
        let message = match error_field {
            Some(msg) if !msg.is_empty() => msg.to_string(),
            _ => format!("Request failed ({})", status),
        };
        RemoteError::Status { status, message }
    }
}

/// Local rejection, no network call made
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Item text is required.")]
    EmptyItemText,
    #[error("Trip name is required.")]
    EmptyTripName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("item {0} is already listed")]
    Duplicate(ItemId),
    #[error("item {0} is not listed")]
    NotFound(ItemId),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid bootstrap document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_prefers_error_field() {
        let err = RemoteError::status(404, Some("Item not found."));
        assert_eq!(err.to_string(), "Item not found.");
    }

    #[test]
    fn test_status_message_falls_back_to_generic() {
        assert_eq!(RemoteError::status(502, None).to_string(), "Request failed (502)");
        assert_eq!(RemoteError::status(500, Some("")).to_string(), "Request failed (500)");
    }
}
