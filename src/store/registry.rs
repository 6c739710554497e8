use crate::actor::{ActorKind, ResolvedActor};
use crate::framework::StoreError;
use crate::store::{EntityStore, KindStore};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// A [`KindStore`] was registered in the slot of a different kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("store for {registered} registered as the {slot} store")]
pub struct RegistryError {
    pub slot: ActorKind,
    pub registered: ActorKind,
}

/// The startup-built mapping from [`ActorKind`] to the store serving it.
///
/// Build one when the process starts and hand it (or clones of it) to every
/// resolver. Cloning shares the underlying stores.
#[derive(Clone)]
pub struct KindRegistry {
    users: Arc<dyn KindStore>,
    teams: Arc<dyn KindStore>,
}

impl KindRegistry {
    pub fn new(
        users: impl KindStore + 'static,
        teams: impl KindStore + 'static,
    ) -> Result<Self, RegistryError> {
        for (slot, store) in [(ActorKind::User, users.kind()), (ActorKind::Team, teams.kind())] {
            if slot != store {
                return Err(RegistryError {
                    slot,
                    registered: store,
                });
            }
        }
        Ok(Self {
            users: Arc::new(users),
            teams: Arc::new(teams),
        })
    }

    pub fn for_kind(&self, kind: ActorKind) -> &dyn KindStore {
        match kind {
            ActorKind::User => self.users.as_ref(),
            ActorKind::Team => self.teams.as_ref(),
        }
    }
}

#[async_trait]
impl EntityStore for KindRegistry {
    async fn fetch_by_id(
        &self,
        kind: ActorKind,
        id: u64,
    ) -> Result<Option<ResolvedActor>, StoreError> {
        self.for_kind(kind).fetch_by_id(id).await
    }

    async fn fetch_by_ids(
        &self,
        kind: ActorKind,
        ids: &BTreeSet<u64>,
    ) -> Result<Vec<ResolvedActor>, StoreError> {
        debug!(%kind, count = ids.len(), "Bulk fetch");
        self.for_kind(kind).fetch_by_ids(ids).await
    }

    async fn find_principals_by_lookup_key(
        &self,
        key: &str,
    ) -> Result<Vec<ResolvedActor>, StoreError> {
        self.for_kind(ActorKind::User).find_by_lookup_key(key).await
    }
}
