//! Custom error types for the committee ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Authorizer;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A required field is missing or a value is out of range
    #[error("Validation error: {0}")]
    Validation(String),

    /// The supplied authorizer does not satisfy the transaction's requirement
    #[error("This transaction requires authorization from: {}", format_authorizers(.required))]
    Authorization { required: Vec<Authorizer> },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Login failed
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The signed-in role may not open the requested page
    #[error("Role '{role}' cannot access the {page} page")]
    Forbidden { role: String, page: String },

    /// Event or initiative status change outside the lifecycle
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// Password hashing or credential file errors
    #[error("Credential error: {0}")]
    Credentials(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

fn format_authorizers(required: &[Authorizer]) -> String {
    required
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl LedgerError {
    /// Create a "not found" error for budget categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for events
    pub fn event_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Event",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for fundraising initiatives
    pub fn initiative_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Fundraising initiative",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Authorization { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
