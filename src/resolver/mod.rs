//! # Actor Resolution
//!
//! Fetches the users and teams behind [`ActorRef`]s. Batch operations issue one
//! bulk query per kind present in the batch, never one per reference.
//!
//! The two batch operations treat missing entities differently, on purpose:
//!
//! - [`ActorResolver::resolve_many`] **omits** references that do not resolve.
//! - [`ActorResolver::resolve_dict`] **fails** if any reference does not resolve,
//!   since callers index its result by every input key.

pub mod error;

pub use error::*;

use crate::actor::{parse, ActorIdentifier, ActorKind, ActorRef, ParseError, ResolvedActor};
use crate::store::EntityStore;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::Hash;
use tracing::{debug, instrument};

/// Resolves actor references against an [`EntityStore`].
///
/// Holds no state besides the store handle; every call is a fresh read.
#[derive(Clone)]
pub struct ActorResolver<S> {
    store: S,
}

impl<S: EntityStore> ActorResolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parses an identifier against this resolver's store.
    pub async fn parse(
        &self,
        identifier: impl Into<ActorIdentifier>,
    ) -> Result<ActorRef, ParseError> {
        parse(identifier.into(), &self.store).await
    }

    /// Fetches the entity behind one reference.
    #[instrument(skip(self, actor), fields(actor = %actor))]
    pub async fn resolve_one(&self, actor: ActorRef) -> Result<ResolvedActor, ResolveError> {
        self.store
            .fetch_by_id(actor.kind(), actor.id())
            .await?
            .ok_or(ResolveError::NotFound {
                kind: actor.kind(),
                id: actor.id(),
            })
    }

    /// Fetches the entities behind `actors`, in input order.
    ///
    /// References that do not resolve are left out of the result. Duplicates in
    /// the input are repeated in the output.
    #[instrument(skip(self, actors), fields(requested = actors.len()))]
    pub async fn resolve_many(&self, actors: &[ActorRef]) -> Result<Vec<ResolvedActor>, ResolveError> {
        if actors.is_empty() {
            return Ok(Vec::new());
        }

        let found = self.fetch_grouped(actors).await?;

        // Omit what the store did not return.
        let resolved: Vec<ResolvedActor> = actors
            .iter()
            .filter_map(|actor| found.get(actor).cloned())
            .collect();
        debug!(resolved = resolved.len(), "Resolved batch");
        Ok(resolved)
    }

    /// Fetches the entity behind every value of `actors`, keeping the keys.
    ///
    /// Fails with [`ResolveError::NotFound`] if any reference does not resolve;
    /// no partial map is ever returned.
    #[instrument(skip(self, actors), fields(requested = actors.len()))]
    pub async fn resolve_dict<K>(
        &self,
        actors: HashMap<K, ActorRef>,
    ) -> Result<HashMap<K, ResolvedActor>, ResolveError>
    where
        K: Eq + Hash + Send,
    {
        let found = self.fetch_grouped(actors.values()).await?;

        // Every key must resolve.
        actors
            .into_iter()
            .map(|(key, actor)| {
                let entity = match found.get(&actor) {
                    Some(entity) => entity.clone(),
                    None => {
                        return Err(ResolveError::NotFound {
                            kind: actor.kind(),
                            id: actor.id(),
                        })
                    }
                };
                Ok((key, entity))
            })
            .collect()
    }

    /// Partitions `actors` by kind, issues one bulk fetch per kind, and indexes
    /// the rows by `(kind, id)`.
    async fn fetch_grouped<'a>(
        &self,
        actors: impl IntoIterator<Item = &'a ActorRef>,
    ) -> Result<HashMap<ActorRef, ResolvedActor>, ResolveError> {
        let mut by_kind: BTreeMap<ActorKind, BTreeSet<u64>> = BTreeMap::new();
        for actor in actors {
            by_kind.entry(actor.kind()).or_default().insert(actor.id());
        }

        let mut found = HashMap::new();
        for (kind, ids) in by_kind {
            for entity in self.store.fetch_by_ids(kind, &ids).await? {
                found.insert(ActorRef::new(entity.id(), kind), entity);
            }
        }
        Ok(found)
    }
}
