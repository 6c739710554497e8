use crate::framework::{Record, StoreError, TableClient};
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Trait for kind-specific clients to inherit the standard read operations.
///
/// Implementors only provide access to the inner [`TableClient`] and an error
/// mapping; `get`, `get_many`, `find` and `delete` come for free.
#[async_trait]
pub trait RecordClient<T: Record>: Send + Sync {
    /// The kind-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic TableClient.
    fn inner(&self) -> &TableClient<T>;

    /// Map framework errors to the kind-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: u64) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every existing record among `ids`.
    #[tracing::instrument(skip(self))]
    async fn get_many(&self, ids: BTreeSet<u64>) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get_many(ids).await.map_err(Self::map_error)
    }

    /// Fetch every record matching a free-form lookup key, best match first.
    #[tracing::instrument(skip(self))]
    async fn find(&self, key: String) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find(key).await.map_err(Self::map_error)
    }

    /// Delete a record by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: u64) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
