//! Error types for actor identifier parsing.

use crate::framework::StoreError;
use std::num::ParseIntError;
use thiserror::Error;

/// An identifier could not be turned into an [`ActorRef`](super::ActorRef).
#[derive(Debug, Error)]
pub enum ParseError {
    /// A numeric or `kind:`-prefixed identifier whose id part is not a valid id.
    #[error("Invalid actor id in {identifier:?}: {source}")]
    InvalidId {
        identifier: String,
        #[source]
        source: ParseIntError,
    },

    /// No interpretation of the identifier matched anything.
    #[error("Unable to resolve actor identifier {0:?}")]
    Unresolved(String),

    /// The principal lookup could not reach the store.
    #[error("Actor lookup failed: {0}")]
    Store(#[from] StoreError),
}

impl ParseError {
    /// True when the identifier was malformed, as opposed to merely unknown.
    pub fn is_format_error(&self) -> bool {
        matches!(self, ParseError::InvalidId { .. })
    }
}

/// Input rejected by [`ActorField`](super::ActorField).
///
/// The underlying cause is logged, not exposed: callers show this to end users.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Unknown actor input")]
    UnknownActor,
}
