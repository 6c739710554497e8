//! # Entity Store Contract
//!
//! The resolver never talks to tables directly. It reads through [`EntityStore`],
//! which takes the actor kind as a value. [`KindStore`] is the per-kind capability
//! behind it, implemented once for users and once for teams, and
//! [`KindRegistry`] picks the right one by matching on [`ActorKind`].

pub mod kinds;
pub mod registry;

pub use registry::*;

use crate::actor::{ActorKind, ResolvedActor};
use crate::framework::StoreError;
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Read access to the records of a single actor kind.
#[async_trait]
pub trait KindStore: Send + Sync {
    /// The kind this store serves.
    fn kind(&self) -> ActorKind;

    async fn fetch_by_id(&self, id: u64) -> Result<Option<ResolvedActor>, StoreError>;

    /// Fetches every existing record among `ids`. Order is unspecified.
    async fn fetch_by_ids(&self, ids: &BTreeSet<u64>) -> Result<Vec<ResolvedActor>, StoreError>;

    /// Fetches every record matching a free-form key, in the store's preferred order.
    async fn find_by_lookup_key(&self, key: &str) -> Result<Vec<ResolvedActor>, StoreError>;
}

/// Read access to users and teams, keyed by kind.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn fetch_by_id(
        &self,
        kind: ActorKind,
        id: u64,
    ) -> Result<Option<ResolvedActor>, StoreError>;

    /// One bulk query for many ids of one kind. Missing ids are skipped; order is
    /// unspecified.
    async fn fetch_by_ids(
        &self,
        kind: ActorKind,
        ids: &BTreeSet<u64>,
    ) -> Result<Vec<ResolvedActor>, StoreError>;

    /// Users matching a username or email, best match first.
    async fn find_principals_by_lookup_key(
        &self,
        key: &str,
    ) -> Result<Vec<ResolvedActor>, StoreError>;
}
