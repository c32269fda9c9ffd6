//! Error types for the GoCardless client
//!
//! This module provides idiomatic Rust error types using thiserror for
//! better error messages and proper error chain handling. Metadata and
//! enum errors are local and synchronous; nothing here is retried.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    #[error("Enum error: {0}")]
    Enum(#[from] EnumError),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: ApiErrorBody },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Errors raised by `Metadata` mutations
///
/// All of these indicate bad caller input. The failed mutation leaves the
/// container unchanged; the caller fixes the input and retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    #[error("Invalid metadata key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("Invalid metadata value for key {key:?}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Metadata cannot hold more than {max} entries")]
    CapacityExceeded { max: usize },
}

/// Errors raised when encoding an enumerated value for the wire
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
    /// The sentinel (or a value outside the wire table) has no wire
    /// representation. This is a programming error in the caller, not a
    /// transient condition.
    #[error("{type_name} value {value} has no wire representation")]
    InvalidEnumValue {
        type_name: &'static str,
        value: String,
    },
}

/// Result type aliases for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
pub type MetadataResult<T> = std::result::Result<T, MetadataError>;

/// Error body returned by the API on non-2xx responses
///
/// Reference: https://developer.gocardless.com/api-reference#overview-errors
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub documentation_url: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiFieldError>,
}

impl ApiErrorBody {
    /// Fallback body for responses that do not carry the documented
    /// error envelope (proxies, HTML error pages).
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error_type: None,
            code: None,
            request_id: None,
            documentation_url: None,
            errors: Vec::new(),
        }
    }
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for field_error in &self.errors {
            match &field_error.field {
                Some(field) => write!(f, "; {}: {}", field, field_error.message)?,
                None => write!(f, "; {}", field_error.message)?,
            }
        }
        Ok(())
    }
}

/// A single validation failure inside an API error body
#[derive(Debug, Clone, Deserialize)]
pub struct ApiFieldError {
    #[serde(default)]
    pub field: Option<String>,
    pub message: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub request_pointer: Option<String>,
}

/// Outer wrapper the API puts around [`ApiErrorBody`]
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}
