//! Error types for the WFS calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a calculation.

use thiserror::Error;

/// The main error type for the WFS calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use wfs_engine::error::EngineError;
///
/// let error = EngineError::UnknownDegree {
///     code: "astrology".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid degree type: astrology");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// Degree code was not found in the configuration.
    #[error("Invalid degree type: {code}")]
    UnknownDegree {
        /// The degree code that was not found.
        code: String,
    },

    /// A request field was non-numeric, negative, or otherwise out of range.
    #[error("Invalid {field}: {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
