//! [`KindStore`] implementations for the table clients.

use crate::actor::{ActorKind, ResolvedActor};
use crate::clients::{TeamClient, UserClient};
use crate::framework::StoreError;
use crate::store::KindStore;
use async_trait::async_trait;
use std::collections::BTreeSet;

#[async_trait]
impl KindStore for UserClient {
    fn kind(&self) -> ActorKind {
        ActorKind::User
    }

    async fn fetch_by_id(&self, id: u64) -> Result<Option<ResolvedActor>, StoreError> {
        Ok(self.table().get(id).await?.map(ResolvedActor::User))
    }

    async fn fetch_by_ids(&self, ids: &BTreeSet<u64>) -> Result<Vec<ResolvedActor>, StoreError> {
        let users = self.table().get_many(ids.clone()).await?;
        Ok(users.into_iter().map(ResolvedActor::User).collect())
    }

    async fn find_by_lookup_key(&self, key: &str) -> Result<Vec<ResolvedActor>, StoreError> {
        let users = self.table().find(key).await?;
        Ok(users.into_iter().map(ResolvedActor::User).collect())
    }
}

#[async_trait]
impl KindStore for TeamClient {
    fn kind(&self) -> ActorKind {
        ActorKind::Team
    }

    async fn fetch_by_id(&self, id: u64) -> Result<Option<ResolvedActor>, StoreError> {
        Ok(self.table().get(id).await?.map(ResolvedActor::Team))
    }

    async fn fetch_by_ids(&self, ids: &BTreeSet<u64>) -> Result<Vec<ResolvedActor>, StoreError> {
        let teams = self.table().get_many(ids.clone()).await?;
        Ok(teams.into_iter().map(ResolvedActor::Team).collect())
    }

    async fn find_by_lookup_key(&self, key: &str) -> Result<Vec<ResolvedActor>, StoreError> {
        let teams = self.table().find(key).await?;
        Ok(teams.into_iter().map(ResolvedActor::Team).collect())
    }
}
