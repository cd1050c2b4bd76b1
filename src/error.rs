//! Error types for the OEE engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during aggregation.

use thiserror::Error;

/// The main error type for the OEE engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shopfloor_oee::error::EngineError;
///
/// let error = EngineError::StoreUnavailable {
///     message: "connection refused".to_string(),
/// };
/// assert_eq!(error.to_string(), "Production store unavailable: connection refused");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The production store could not be reached at all.
    ///
    /// The whole computation aborts; callers keep whatever data they last
    /// displayed rather than overwriting it with a partial result.
    #[error("Production store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the underlying failure.
        message: String,
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

    /// A deviation window of zero days was requested.
    #[error("Invalid deviation window: {days} days (must be at least 1)")]
    InvalidWindow {
        /// The rejected window length.
        days: u32,
    },

    /// A tooling resource referenced by an usage increment does not exist.
    #[error("Tooling resource not found: {tool_id}")]
    ToolNotFound {
        /// The tooling identifier that was not found.
        tool_id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
