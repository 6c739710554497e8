//! # Identifier Parsing
//!
//! Turns the identifiers API callers send into [`ActorRef`]s. Accepted forms, in
//! the order they are tried:
//!
//! | Input                   | Result                          |
//! |-------------------------|---------------------------------|
//! | `1231` (integer)        | user 1231                       |
//! | `"1231"`                | user 1231                       |
//! | `"user:1231"`           | user 1231                       |
//! | `"team:1231"`           | team 1231                       |
//! | `"maiseythedog"`        | first user with that username   |
//! | `"maisey@dogsrule.com"` | first user with that email      |
//!
//! The order is fixed: an all-digit string is always a user id, never a username.

use crate::actor::{ActorRef, ParseError};
use crate::store::EntityStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A raw actor identifier as received from a caller: a bare integer or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActorIdentifier {
    Id(u64),
    Text(String),
}

impl ActorIdentifier {
    /// Identifiers that mean "no actor": the empty string and the id `0`.
    pub fn is_empty(&self) -> bool {
        match self {
            ActorIdentifier::Id(id) => *id == 0,
            ActorIdentifier::Text(text) => text.is_empty(),
        }
    }
}

impl From<u64> for ActorIdentifier {
    fn from(id: u64) -> Self {
        ActorIdentifier::Id(id)
    }
}

impl From<String> for ActorIdentifier {
    fn from(text: String) -> Self {
        ActorIdentifier::Text(text)
    }
}

impl From<&str> for ActorIdentifier {
    fn from(text: &str) -> Self {
        ActorIdentifier::Text(text.to_string())
    }
}

impl From<ActorRef> for ActorIdentifier {
    fn from(actor: ActorRef) -> Self {
        ActorIdentifier::Text(actor.actor_id())
    }
}

/// Parses an identifier into an [`ActorRef`].
///
/// Only a free-form username or email touches the store, and then only the
/// principal lookup. Its first result wins; ordering is the store's concern.
#[instrument(skip(store))]
pub async fn parse<S>(identifier: ActorIdentifier, store: &S) -> Result<ActorRef, ParseError>
where
    S: EntityStore + ?Sized,
{
    let text = match identifier {
        ActorIdentifier::Id(id) => return Ok(ActorRef::user(id)),
        ActorIdentifier::Text(text) => text,
    };

    if let Some(actor) = ActorRef::parse_canonical(&text)? {
        return Ok(actor);
    }

    let matches = store.find_principals_by_lookup_key(&text).await?;
    debug!(candidates = matches.len(), "Principal lookup");
    matches
        .first()
        .map(|user| ActorRef::user(user.id()))
        .ok_or(ParseError::Unresolved(text))
}
