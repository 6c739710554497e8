use crate::actor::{ActorKind, ParseError, ResolvedActor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An immutable `(id, kind)` reference to a user or team.
///
/// References are cheap `Copy` values; they are built by the parser or from an
/// already fetched entity, and never stored on their own. The external string
/// form is `"{kind}:{id}"` and is accepted back by [`FromStr`] and serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActorRef {
    id: u64,
    kind: ActorKind,
}

impl ActorRef {
    pub const fn new(id: u64, kind: ActorKind) -> Self {
        Self { id, kind }
    }

    pub const fn user(id: u64) -> Self {
        Self::new(id, ActorKind::User)
    }

    pub const fn team(id: u64) -> Self {
        Self::new(id, ActorKind::Team)
    }

    /// Wraps the id and kind of an entity that has already been fetched.
    pub fn from_resolved(actor: &ResolvedActor) -> Self {
        Self::new(actor.id(), actor.kind())
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    /// The canonical `"{kind}:{id}"` form, e.g. `"team:45"`.
    pub fn actor_id(&self) -> String {
        self.to_string()
    }

    /// The bare kind string, `"user"` or `"team"`.
    pub fn type_string(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Parses the forms that need no store access.
    ///
    /// Returns `Ok(None)` when the input is none of them and should fall through
    /// to a free-form lookup. Order matters: bare digits first, then the
    /// `user:` and `team:` prefixes.
    pub(crate) fn parse_canonical(identifier: &str) -> Result<Option<Self>, ParseError> {
        let invalid = |source| ParseError::InvalidId {
            identifier: identifier.to_string(),
            source,
        };

        if !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit()) {
            return identifier.parse().map(|id| Some(Self::user(id))).map_err(invalid);
        }

        for kind in ActorKind::ALL {
            if let Some(rest) = identifier.strip_prefix(kind.prefix()) {
                return rest.parse().map(|id| Some(Self::new(id, kind))).map_err(invalid);
            }
        }

        Ok(None)
    }
}

impl fmt::Display for ActorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// Store-free parsing: bare digits, `user:<id>` or `team:<id>`.
///
/// Free-form usernames and emails need a store; use [`crate::actor::parse`].
impl FromStr for ActorRef {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_canonical(s)?.ok_or_else(|| ParseError::Unresolved(s.to_string()))
    }
}

impl TryFrom<String> for ActorRef {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ActorRef> for String {
    fn from(actor: ActorRef) -> Self {
        actor.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form() {
        assert_eq!(ActorRef::user(123).actor_id(), "user:123");
        assert_eq!(ActorRef::team(45).actor_id(), "team:45");
        assert_eq!(ActorRef::team(45).type_string(), "team");
        assert_eq!(ActorRef::user(0).type_string(), "user");
    }

    #[test]
    fn test_from_str_forms() {
        assert_eq!("1231".parse::<ActorRef>().unwrap(), ActorRef::user(1231));
        assert_eq!("user:1231".parse::<ActorRef>().unwrap(), ActorRef::user(1231));
        assert_eq!("team:1231".parse::<ActorRef>().unwrap(), ActorRef::team(1231));
        assert_eq!("0".parse::<ActorRef>().unwrap(), ActorRef::user(0));
    }

    #[test]
    fn test_malformed_prefixed_ids_are_format_errors() {
        for input in ["team:abc", "user:", "user:-1", "team:1.5", "user: 7", "99999999999999999999999"] {
            let err = input.parse::<ActorRef>().unwrap_err();
            assert!(err.is_format_error(), "{input:?} gave {err:?}");
        }
    }

    #[test]
    fn test_free_form_needs_a_store() {
        for input in ["maiseythedog", "maisey@dogsrule.com", "", "USER:1", "group:1"] {
            let err = input.parse::<ActorRef>().unwrap_err();
            assert!(matches!(err, ParseError::Unresolved(_)), "{input:?} gave {err:?}");
        }
    }

    #[test]
    fn test_round_trip() {
        for actor in [
            ActorRef::user(0),
            ActorRef::user(1),
            ActorRef::team(7),
            ActorRef::user(u64::MAX),
            ActorRef::team(u64::MAX),
        ] {
            assert_eq!(actor.actor_id().parse::<ActorRef>().unwrap(), actor);
        }
    }

    #[test]
    fn test_equality_and_hash_use_kind() {
        use std::collections::HashSet;
        let set: HashSet<ActorRef> = [ActorRef::user(1), ActorRef::team(1), ActorRef::user(1)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let json = serde_json::to_string(&ActorRef::team(9)).unwrap();
        assert_eq!(json, "\"team:9\"");
        let back: ActorRef = serde_json::from_str("\"user:4\"").unwrap();
        assert_eq!(back, ActorRef::user(4));
        assert!(serde_json::from_str::<ActorRef>("\"team:x\"").is_err());
    }
}
