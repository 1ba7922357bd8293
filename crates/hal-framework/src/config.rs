//! # Configuration
//!
//! Rendering settings. Every field has a default, so a partial JSON document is
//! enough to override one value:
//!
//! ```rust
//! use hal_framework::HalConfig;
//!
//! let config = HalConfig::from_json_str(r#"{ "max_depth": 2 }"#).unwrap();
//! assert_eq!(config.max_depth, 2);
//! assert_eq!(config.url_field_name, "self");
//! ```

use crate::document::URL_FIELD_NAME;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Settings shared by every render and envelope call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HalConfig {
    /// Link key identifying a resource's own URL.
    pub url_field_name: String,
    /// Embedded key holding the items of a collection envelope.
    pub items_field_name: String,
    /// How many levels of nested resources the renderer embeds before it
    /// falls back to linking them.
    pub max_depth: usize,
    pub pagination: PaginationConfig,
}

impl Default for HalConfig {
    fn default() -> Self {
        Self {
            url_field_name: URL_FIELD_NAME.to_string(),
            items_field_name: "items".to_string(),
            max_depth: 8,
            pagination: PaginationConfig::default(),
        }
    }
}

impl HalConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Defaults for the paginators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub page_size: u64,
    pub max_page_size: u64,
    pub page_query_param: String,
    pub limit_query_param: String,
    pub offset_query_param: String,
    pub cursor_query_param: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            max_page_size: 100,
            page_query_param: "page".to_string(),
            limit_query_param: "limit".to_string(),
            offset_query_param: "offset".to_string(),
            cursor_query_param: "cursor".to_string(),
        }
    }
}
