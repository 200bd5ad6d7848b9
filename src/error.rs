//! Custom error types for Outset
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Wizard engine errors other than
//! `Persistence` indicate caller misuse and are not recoverable for that call.

use thiserror::Error;

use crate::storage::gateway::GatewayError;

/// The main error type for Outset operations
#[derive(Error, Debug)]
pub enum OutsetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A step with the same identifier is already registered
    #[error("Step already registered: {id}")]
    DuplicateStep { id: String },

    /// Step index outside the registered range
    #[error("Step index {index} out of range (registered steps: {count})")]
    StepOutOfRange { index: usize, count: usize },

    /// Retreat was requested with no step to go back to
    #[error("No prior step to return to")]
    NoPriorStep,

    /// Operation not permitted in the wizard's current state
    #[error("Cannot {operation} while wizard is {state}")]
    InvalidTransition {
        operation: &'static str,
        state: &'static str,
    },

    /// A finalize commit is already in flight
    #[error("A finalize operation is already in progress")]
    OperationInProgress,

    /// Gateway commit failure; draft and state are preserved for retry
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl OutsetError {
    /// Create an invalid-transition error for an operation in a given state
    pub fn invalid_transition(operation: &'static str, state: &'static str) -> Self {
        Self::InvalidTransition { operation, state }
    }

    /// Check if this error is safe to retry (only gateway failures are)
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for OutsetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OutsetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<GatewayError> for OutsetError {
    fn from(err: GatewayError) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Result type alias for Outset operations
pub type OutsetResult<T> = Result<T, OutsetError>;
