//! Error types for the User table.

use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(u64),

    /// The user data provided is invalid.
    #[error("User validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the user table.
    #[error("Table communication error: {0}")]
    TableCommunicationError(String),
}

impl From<String> for UserError {
    fn from(msg: String) -> Self {
        UserError::TableCommunicationError(msg)
    }
}
