//! Error types for the shift calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during classification,
//! aggregation, and shift lifecycle operations.

use thiserror::Error;

use crate::models::ShiftStatus;

/// The main error type for the shift calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use dienstplan_engine::error::EngineError;
///
/// let error = EngineError::InvalidTime {
///     value: "25:99".to_string(),
///     message: "hour out of range".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time '25:99': hour out of range");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A wall-clock time string could not be parsed as `HH:MM`.
    #[error("Invalid time '{value}': {message}")]
    InvalidTime {
        /// The raw input that failed to parse.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A shift record was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A shift record does not exist in the store.
    #[error("Shift not found: {shift_id}")]
    ShiftNotFound {
        /// The ID that was looked up.
        shift_id: String,
    },

    /// A status transition is not permitted by the shift lifecycle.
    #[error("Invalid transition for shift '{shift_id}': {from} -> {to}")]
    InvalidTransition {
        /// The ID of the shift whose transition was rejected.
        shift_id: String,
        /// The current status.
        from: ShiftStatus,
        /// The requested status.
        to: ShiftStatus,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An export template name was not found in the configuration.
    #[error("Export template not found: {name}")]
    TemplateNotFound {
        /// The template name that was requested.
        name: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
