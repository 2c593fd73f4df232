//! Error types for Recordex operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used
//! across all Recordex crates. Uses `thiserror` for derive macros.
//!
//! The variants follow the pipeline's failure taxonomy: decode problems are
//! recoverable and handled at the decoder boundary, embedding problems are
//! fatal for the run, and query validation problems are reported to the
//! caller.

use thiserror::Error;

/// Errors that can occur in Recordex operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A document's bytes could not be turned into text.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The embedding provider could not produce a vector.
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Malformed query parameters (e.g. a zero result count).
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create an embedding error.
    pub fn embedding(msg: impl Into<String>) -> Self {
        Self::Embedding(msg.into())
    }

    /// Create an invalid query error.
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

/// Result type alias using Recordex's Error type.
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Tests
// ============================================================================
