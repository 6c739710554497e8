//! Error types for the Team table.

use thiserror::Error;

/// Errors that can occur during team operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TeamError {
    /// The requested team was not found.
    #[error("Team not found: {0}")]
    NotFound(u64),

    /// No team with this slug exists in the organization.
    #[error("Team {slug:?} not found in organization {organization_id}")]
    UnknownSlug { organization_id: u64, slug: String },

    /// The team data provided is invalid.
    #[error("Team validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the team table.
    #[error("Table communication error: {0}")]
    TableCommunicationError(String),
}

impl From<String> for TeamError {
    fn from(msg: String) -> Self {
        TeamError::TableCommunicationError(msg)
    }
}
