//! HTTP client binding configuration
//!
//! Base URL, default headers and an optional request timeout for the
//! joke API client. Responses are always parsed as JSON.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Default joke API endpoint
pub const DEFAULT_BASE_URL: &str = "https://official-joke-api.appspot.com";

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL that request paths are appended to
    pub base_url: String,
    /// Request timeout in seconds (None = wait indefinitely)
    pub timeout_secs: Option<u64>,
    /// Headers sent with every request
    pub headers: BTreeMap<String, String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            headers: default_headers(),
        }
    }
}

/// Headers every request carries unless overridden
pub fn default_headers() -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers
}

/// API settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileApi {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Extra headers, merged over the defaults
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl ApiConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileApi>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let mut headers = defaults.headers;
        headers.extend(file.headers);

        Self {
            base_url: file.base_url.unwrap_or(defaults.base_url),
            timeout_secs: file.timeout_secs.or(defaults.timeout_secs),
            headers,
        }
    }
}
