//! Error types for GameSmith
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Maximum number of characters of raw model output kept in a
/// `MalformedResponse` error for diagnostics.
pub const RAW_EXCERPT_LIMIT: usize = 1000;

/// Main error type for GameSmith operations
///
/// This enum encompasses all possible errors that can occur during
/// game generation, session mutation, configuration loading, and
/// persistence.
#[derive(Error, Debug)]
pub enum GameSmithError {
    /// Local input validation errors (empty prompt, nothing to save)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors (including missing credentials)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport failures talking to the generative backend
    /// (network, authentication, quota)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend returned content that does not satisfy the
    /// `{html, css, js}` JSON contract
    #[error("Malformed model response: {excerpt}")]
    MalformedResponse {
        /// Bounded prefix of the raw response text
        excerpt: String,
    },

    /// Persistence store errors (database operations)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl GameSmithError {
    /// Build a `MalformedResponse` error from raw model output, keeping
    /// at most [`RAW_EXCERPT_LIMIT`] characters for diagnostics.
    pub fn malformed_response(raw: &str) -> Self {
        let excerpt: String = raw.chars().take(RAW_EXCERPT_LIMIT).collect();
        Self::MalformedResponse { excerpt }
    }
}

/// Result type alias for GameSmith operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
