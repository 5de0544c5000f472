//! HTTP client error types

use std::fmt;

/// Errors that can occur while talking to the joke API
#[derive(Debug)]
pub enum ApiError {
    /// Client could not be built (TLS backend, invalid settings)
    Client(String),
    /// A configured default header is not a valid HTTP header
    InvalidHeader { name: String, reason: String },
    /// Connection, DNS or timeout failure
    Network(String),
    /// Server answered with a non-2xx status
    Status { status: u16, body: String },
    /// Response body was not the expected JSON
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client(msg) => write!(f, "Failed to create HTTP client: {}", msg),
            Self::InvalidHeader { name, reason } => {
                write!(f, "Invalid header '{}': {}", name, reason)
            }
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Status { status, body } => {
                if body.is_empty() {
                    write!(f, "API error ({})", status)
                } else {
                    write!(f, "API error ({}): {}", status, body)
                }
            }
            Self::Decode(msg) => write!(f, "Failed to parse response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
