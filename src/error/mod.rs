//! Error handling for shouldupdate.
//!
//! This module provides:
//! - [`SuError`]: The main error enum for all shouldupdate operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Serializable error with suggestion and context

mod codes;

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;

/// Main error type for shouldupdate operations.
#[derive(Error, Debug)]
pub enum SuError {
    #[error("Application '{0}' not found in your managed list")]
    AppNotFound(String),

    #[error("invalid application identifier: expected 'owner/repo', got '{0}'")]
    InvalidIdentifier(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("network error fetching release info for {identifier} from {url}: {source}")]
    Network {
        identifier: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error(
        "release API error for {identifier} (status {status}){}",
        api_detail(.message.as_deref(), .documentation_url.as_deref(), .url)
    )]
    Api {
        identifier: String,
        url: String,
        status: u16,
        message: Option<String>,
        documentation_url: Option<String>,
    },

    #[error("error decoding JSON response for {identifier} from {url}: {source}")]
    Decode {
        identifier: String,
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no version tag (tag_name) found in the latest release for {identifier} (URL: {url})")]
    MissingTag { identifier: String, url: String },

    #[error("could not read version file '{}': {source}", .path.display())]
    StoreRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse version file '{}' (TOML format error): {source}", .path.display())]
    StoreParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid entry in version file '{}': {reason}", .path.display())]
    StoreInvalid { path: PathBuf, reason: String },

    #[error("could not format versions for saving: {0}")]
    StoreSerialize(#[source] toml::ser::Error),

    #[error("could not create directory '{}': {source}", .path.display())]
    StoreDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write versions to file '{}': {source}", .path.display())]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

fn api_detail(message: Option<&str>, documentation_url: Option<&str>, url: &str) -> String {
    match message.filter(|m| !m.is_empty()) {
        Some(message) => match documentation_url.filter(|u| !u.is_empty()) {
            Some(doc) => format!(": {message} (see {doc})"),
            None => format!(": {message}"),
        },
        None => format!(" (URL: {url})"),
    }
}

impl SuError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::AppNotFound(_) => ErrorCode::AppNotFound,
            Self::InvalidIdentifier(_) => ErrorCode::InvalidIdentifier,
            Self::ValidationFailed(_) => ErrorCode::ValidationFailed,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::Network { .. } => ErrorCode::NetworkError,
            Self::Api { .. } => ErrorCode::ApiError,
            Self::Decode { .. } => ErrorCode::DecodeError,
            Self::MissingTag { .. } => ErrorCode::MissingTag,
            Self::StoreRead { .. } => ErrorCode::StoreReadError,
            Self::StoreParse { .. } | Self::StoreInvalid { .. } => ErrorCode::StoreParseError,
            Self::StoreSerialize(_) | Self::Json(_) => ErrorCode::SerializationError,
            Self::StoreDir { .. } => ErrorCode::StoreDirError,
            Self::StoreWrite { .. } => ErrorCode::StoreWriteError,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::AppNotFound(name) => Some(serde_json::json!({ "app": name })),
            Self::InvalidIdentifier(identifier) => {
                Some(serde_json::json!({ "identifier": identifier }))
            }
            Self::Api {
                identifier,
                url,
                status,
                ..
            } => Some(serde_json::json!({
                "identifier": identifier,
                "url": url,
                "status": status,
            })),
            Self::Network {
                identifier, url, ..
            }
            | Self::Decode {
                identifier, url, ..
            }
            | Self::MissingTag { identifier, url } => {
                Some(serde_json::json!({ "identifier": identifier, "url": url }))
            }
            Self::StoreRead { path, .. }
            | Self::StoreParse { path, .. }
            | Self::StoreInvalid { path, .. }
            | Self::StoreDir { path, .. }
            | Self::StoreWrite { path, .. } => {
                Some(serde_json::json!({ "path": path.display().to_string() }))
            }
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_su_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
///
/// Emitted in JSON output so scripts can branch on the failure class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "API_ERROR")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 502)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// Error category (e.g., "release", "store")
    pub category: String,
}

impl StructuredError {
    /// Create a new structured error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    /// Create a structured error from an `SuError`.
    #[must_use]
    pub fn from_su_error(err: &SuError) -> Self {
        let mut structured = Self::new(err.code(), err.to_string());
        structured.context = err.context();
        structured
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<SuError> for StructuredError {
    fn from(err: SuError) -> Self {
        Self::from_su_error(&err)
    }
}

impl From<&SuError> for StructuredError {
    fn from(err: &SuError) -> Self {
        Self::from_su_error(err)
    }
}

/// Result type alias using `SuError`.
pub type Result<T> = std::result::Result<T, SuError>;
