//! Client Configuration
//!
//! Optional `config` object of the bootstrap document.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Absolute API origin; the page origin when absent
    pub api_base: Option<String>,
    /// Page that renders a trip, navigated to with `?trip=`
    pub page_path: String,
    /// How long feedback lines stay visible; `None` keeps them until replaced
    pub feedback_ttl_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            page_path: "/groceries".to_string(),
            feedback_ttl_ms: Some(4000),
        }
    }
}

impl ClientConfig {
    pub fn api_base_or<'a>(&'a self, origin: &'a str) -> &'a str {
        self.api_base.as_deref().unwrap_or(origin)
    }
}
