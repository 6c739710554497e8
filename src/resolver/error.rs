//! Error types for actor resolution.

use crate::actor::ActorKind;
use crate::framework::StoreError;
use thiserror::Error;

/// Errors returned by [`ActorResolver`](super::ActorResolver).
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A referenced user or team does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: ActorKind, id: u64 },

    /// The store could not be reached.
    #[error(transparent)]
    Store(#[from] StoreError),
}
