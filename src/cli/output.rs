use chrono::{DateTime, Utc};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

use crate::error::{ErrorCode, Result, StructuredError, SuError};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable output with colors (default)
    #[default]
    Human,
    /// Pretty-printed JSON envelope
    Json,
    /// Human wording without colors
    Plain,
}

impl OutputFormat {
    /// Check if this format should use colors
    #[must_use]
    pub const fn use_colors(&self) -> bool {
        matches!(self, Self::Human)
    }

    /// Check if this format is machine-readable
    #[must_use]
    pub const fn is_machine_readable(&self) -> bool {
        matches!(self, Self::Json)
    }
}

#[derive(Serialize)]
pub struct RobotResponse<T> {
    pub status: RobotStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Ok,
    Error {
        /// Error code enum value (e.g., "APP_NOT_FOUND")
        code: ErrorCode,
        numeric_code: u16,
        message: String,
        suggestion: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        context: Option<serde_json::Value>,
        recoverable: bool,
        category: String,
    },
}

impl From<StructuredError> for RobotStatus {
    fn from(err: StructuredError) -> Self {
        Self::Error {
            code: err.code,
            numeric_code: err.numeric_code,
            message: err.message,
            suggestion: err.suggestion,
            context: err.context,
            recoverable: err.recoverable,
            category: err.category,
        }
    }
}

impl From<&SuError> for RobotStatus {
    fn from(err: &SuError) -> Self {
        err.to_structured().into()
    }
}

pub fn robot_ok<T: Serialize>(data: T) -> RobotResponse<T> {
    RobotResponse {
        status: RobotStatus::Ok,
        timestamp: Utc::now(),
        version: crate::VERSION.to_string(),
        data,
    }
}

/// Error envelope carrying the structured form of `err`.
pub fn robot_error(err: &SuError) -> RobotResponse<serde_json::Value> {
    RobotResponse {
        status: err.into(),
        timestamp: Utc::now(),
        version: crate::VERSION.to_string(),
        data: serde_json::Value::Null,
    }
}

pub fn emit_robot<T: Serialize>(response: &RobotResponse<T>) -> Result<()> {
    emit_json(response)
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}

#[must_use]
pub fn success_line(message: &str) -> String {
    format!("{} {message}", "Success:".green().bold())
}

#[must_use]
pub fn info_line(message: &str) -> String {
    format!("{} {message}", "Info:".yellow().bold())
}

#[must_use]
pub fn error_line(message: &str) -> String {
    format!("{} {message}", "Error:".red().bold())
}

#[must_use]
pub fn header_line(title: &str) -> String {
    format!("== {title} ==").blue().bold().to_string()
}

pub fn emit_success(message: &str) {
    println!("{}", success_line(message));
}

pub fn emit_info(message: &str) {
    println!("{}", info_line(message));
}

/// Errors always go to stderr.
pub fn emit_error(message: &str) {
    eprintln!("{}", error_line(message));
}
