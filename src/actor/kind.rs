use serde::{Deserialize, Serialize};
use std::fmt;

/// The discriminator between the two actor kinds.
///
/// The lowercase name doubles as the prefix of the canonical identifier form
/// (`"user:12"`, `"team:3"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    /// An individual user.
    User,
    /// A team of users.
    Team,
}

impl ActorKind {
    pub const ALL: [ActorKind; 2] = [ActorKind::User, ActorKind::Team];

    pub fn as_str(self) -> &'static str {
        match self {
            ActorKind::User => "user",
            ActorKind::Team => "team",
        }
    }

    /// The `"<kind>:"` prefix of the canonical identifier form.
    pub fn prefix(self) -> &'static str {
        match self {
            ActorKind::User => "user:",
            ActorKind::Team => "team:",
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
