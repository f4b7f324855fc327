//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Application errors
//! - 2xx: Validation errors
//! - 3xx: Config errors
//! - 5xx: Release lookup errors
//! - 6xx: Version store errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for JSON output.
///
/// Each variant maps to a numeric code (e.g., `AppNotFound` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Application errors (1xx)
    // ========================================
    /// E101: Application is not tracked in the version store
    AppNotFound,

    // ========================================
    // Validation errors (2xx)
    // ========================================
    /// E201: Identifier is not in `owner/repo` form
    InvalidIdentifier,
    /// E202: Input failed validation
    ValidationFailed,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Settings file or environment override is invalid
    ConfigInvalid,

    // ========================================
    // Release lookup errors (5xx)
    // ========================================
    /// E501: Release API could not be reached
    NetworkError,
    /// E502: Release API answered with a non-success status
    ApiError,
    /// E503: Release API response body was not valid JSON
    DecodeError,
    /// E504: Latest release carries no tag
    MissingTag,

    // ========================================
    // Store errors (6xx)
    // ========================================
    /// E601: Version file could not be read
    StoreReadError,
    /// E602: Version file could not be written
    StoreWriteError,
    /// E603: Version file is not valid TOML
    StoreParseError,
    /// E604: Version file directory could not be created
    StoreDirError,
    /// E605: Serialization failed
    SerializationError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `AppNotFound` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::AppNotFound => 101,

            Self::InvalidIdentifier => 201,
            Self::ValidationFailed => 202,

            Self::ConfigInvalid => 301,

            Self::NetworkError => 501,
            Self::ApiError => 502,
            Self::DecodeError => 503,
            Self::MissingTag => 504,

            Self::StoreReadError => 601,
            Self::StoreWriteError => 602,
            Self::StoreParseError => 603,
            Self::StoreDirError => 604,
            Self::SerializationError => 605,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::AppNotFound => "Run `shouldupdate list` to see tracked applications, or `shouldupdate add <name> <version>` to track it",
            Self::InvalidIdentifier => "Use the GitHub `owner/repo` form, e.g. `sharkdp/bat`",
            Self::ValidationFailed => "Check the command arguments and try again",
            Self::ConfigInvalid => "Fix the settings file or the SHOULDUPDATE_* environment variables",
            Self::NetworkError => "Check your network connection and the API base URL",
            Self::ApiError => "Check that the repository exists and has a published release",
            Self::DecodeError => "The release API returned an unexpected body. Check the API base URL",
            Self::MissingTag => "The latest release has no tag. Check the repository's releases page",
            Self::StoreReadError => "Check that the version file is readable",
            Self::StoreWriteError => "Check that the version file location is writable",
            Self::StoreParseError => "Fix the TOML syntax in the version file, or remove it to start over",
            Self::StoreDirError => "Check permissions on the configuration directory",
            Self::SerializationError => "Serialization failed. This is a bug. Please report with full context",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::SerializationError)
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "app",
            2 => "validation",
            3 => "config",
            5 => "release",
            6 => "store",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::AppNotFound,
            Self::InvalidIdentifier,
            Self::ValidationFailed,
            Self::ConfigInvalid,
            Self::NetworkError,
            Self::ApiError,
            Self::DecodeError,
            Self::MissingTag,
            Self::StoreReadError,
            Self::StoreWriteError,
            Self::StoreParseError,
            Self::StoreDirError,
            Self::SerializationError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
