use crate::actor::{ActorKind, ActorRef};
use crate::model::{Team, User};
use serde::{Deserialize, Serialize};

/// A user or team fetched from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResolvedActor {
    User(User),
    Team(Team),
}

impl ResolvedActor {
    pub fn id(&self) -> u64 {
        match self {
            ResolvedActor::User(user) => user.id,
            ResolvedActor::Team(team) => team.id,
        }
    }

    pub fn kind(&self) -> ActorKind {
        match self {
            ResolvedActor::User(_) => ActorKind::User,
            ResolvedActor::Team(_) => ActorKind::Team,
        }
    }

    pub fn actor_ref(&self) -> ActorRef {
        ActorRef::from_resolved(self)
    }

    /// Teams are always active; users carry their own flag.
    pub fn is_active(&self) -> bool {
        match self {
            ResolvedActor::User(user) => user.is_active,
            ResolvedActor::Team(_) => true,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            ResolvedActor::User(user) => user.display_name(),
            ResolvedActor::Team(team) => &team.name,
        }
    }

    pub fn as_user(&self) -> Option<&User> {
        match self {
            ResolvedActor::User(user) => Some(user),
            ResolvedActor::Team(_) => None,
        }
    }

    pub fn as_team(&self) -> Option<&Team> {
        match self {
            ResolvedActor::Team(team) => Some(team),
            ResolvedActor::User(_) => None,
        }
    }
}

impl From<User> for ResolvedActor {
    fn from(user: User) -> Self {
        ResolvedActor::User(user)
    }
}

impl From<Team> for ResolvedActor {
    fn from(team: Team) -> Self {
        ResolvedActor::Team(team)
    }
}
