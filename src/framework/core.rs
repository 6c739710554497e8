//! # Core Table Framework
//!
//! This module defines the generic building blocks for the in-process entity store.
//!
//! ## Key Types
//!
//! - [`Record`]: The trait that every stored entity kind must implement.
//! - [`TableActor`]: The generic actor that owns all records of one kind.
//! - [`TableClient`]: The generic client for communicating with a table actor.
//! - [`StoreError`]: Common errors (e.g., TableClosed, NotFound).

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any stored entity must implement to be managed by a [`TableActor`].
///
/// # Architecture Note
/// Users and teams are stored the same way: keyed by a store-assigned `u64`,
/// fetched by id, by a batch of ids, or by a free-form lookup key. Writing the
/// table loop once against this contract keeps the per-kind code down to
/// validation and matching rules.
///
/// We use associated types for the create and update payloads so a `UserCreate`
/// can never be sent to the team table.
pub trait Record: Clone + Debug + Send + Sync + 'static {
    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing record.
    type Update: Send + Sync + Debug;

    /// The error type for this record.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full record from the assigned id and the payload.
    fn from_create_params(id: u64, params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply an update to the record in place.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Rank how well this record matches a free-form lookup key.
    ///
    /// `None` means no match. Lower ranks sort first in [`TableClient::find`]
    /// results; ties are broken by ascending id.
    fn lookup_rank(&self, key: &str) -> Option<u8>;

    /// Key that no two records in the table may share.
    ///
    /// Checked on every create and update. `None` opts the record out.
    fn unique_key(&self) -> Option<String> {
        None
    }

    /// The error a create or update reports when `key` is already taken.
    fn duplicate_key(key: String) -> Self::Error;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the table framework itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Table closed")]
    TableClosed,
    #[error("Table dropped response channel")]
    TableDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Record error: {0}")]
    Record(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by tables.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to a table actor.
///
/// The write variants (`Create`, `Update`, `Delete`) exist so a table can be
/// seeded and maintained; resolution itself only ever sends the read variants
/// (`Get`, `GetMany`, `Find`).
#[derive(Debug)]
pub enum TableRequest<T: Record> {
    Create {
        params: T::Create,
        respond_to: Response<u64>,
    },
    Get {
        id: u64,
        respond_to: Response<Option<T>>,
    },
    GetMany {
        ids: BTreeSet<u64>,
        respond_to: Response<Vec<T>>,
    },
    Find {
        key: String,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: u64,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: u64,
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC TABLE SERVER
// =============================================================================

/// The generic actor that owns every record of one kind.
///
/// # Concurrency Model
/// Each table processes its own messages *sequentially*, so the `BTreeMap` needs
/// no lock. Any number of callers can hold a [`TableClient`] clone and issue
/// requests concurrently; they are serialized by the channel.
pub struct TableActor<T: Record> {
    receiver: mpsc::Receiver<TableRequest<T>>,
    rows: BTreeMap<u64, T>,
    next_id: u64,
}

impl<T: Record> TableActor<T> {
    /// Creates a new `TableActor` and its associated `TableClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When the channel is
    /// full, client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, TableClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            rows: BTreeMap::new(),
            next_id: 1,
        };
        (actor, TableClient::new(sender))
    }

    /// Runs the table's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // "User" instead of "actor_resolver::model::user::User"
        let table = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(table, "Table started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                TableRequest::Create { params, respond_to } => {
                    debug!(table, ?params, "Create");
                    let id = self.next_id;
                    match T::from_create_params(id, params)
                        .and_then(|row| self.check_unique(id, row))
                    {
                        Ok(row) => {
                            self.next_id += 1;
                            self.rows.insert(id, row);
                            info!(table, id, size = self.rows.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(table, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::Record(Box::new(e))));
                        }
                    }
                }
                TableRequest::Get { id, respond_to } => {
                    let row = self.rows.get(&id).cloned();
                    debug!(table, id, found = row.is_some(), "Get");
                    let _ = respond_to.send(Ok(row));
                }
                TableRequest::GetMany { ids, respond_to } => {
                    let rows: Vec<T> = ids
                        .iter()
                        .filter_map(|id| self.rows.get(id).cloned())
                        .collect();
                    debug!(table, requested = ids.len(), found = rows.len(), "GetMany");
                    let _ = respond_to.send(Ok(rows));
                }
                TableRequest::Find { key, respond_to } => {
                    let mut ranked: Vec<(u8, u64, &T)> = self
                        .rows
                        .iter()
                        .filter_map(|(id, row)| row.lookup_rank(&key).map(|rank| (rank, *id, row)))
                        .collect();
                    ranked.sort_by_key(|(rank, id, _)| (*rank, *id));
                    let rows: Vec<T> = ranked.into_iter().map(|(_, _, row)| row.clone()).collect();
                    debug!(table, %key, found = rows.len(), "Find");
                    let _ = respond_to.send(Ok(rows));
                }
                TableRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(table, id, ?update, "Update");
                    let Some(current) = self.rows.get(&id) else {
                        warn!(table, id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    // A rejected update leaves the stored row untouched.
                    let mut row = current.clone();
                    match row.on_update(update).and_then(|()| self.check_unique(id, row)) {
                        Ok(row) => {
                            self.rows.insert(id, row.clone());
                            info!(table, id, "Updated");
                            let _ = respond_to.send(Ok(row));
                        }
                        Err(e) => {
                            warn!(table, id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(StoreError::Record(Box::new(e))));
                        }
                    }
                }
                TableRequest::Delete { id, respond_to } => {
                    debug!(table, id, "Delete");
                    if self.rows.remove(&id).is_some() {
                        info!(table, id, size = self.rows.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(table, id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(table, size = self.rows.len(), "Shutdown");
    }

    /// Rejects `row` if another record already holds its unique key.
    fn check_unique(&self, id: u64, row: T) -> Result<T, T::Error> {
        if let Some(key) = row.unique_key() {
            let taken = self.rows.iter().any(|(other_id, other)| {
                *other_id != id && other.unique_key().as_ref() == Some(&key)
            });
            if taken {
                return Err(T::duplicate_key(key));
            }
        }
        Ok(row)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`TableActor`].
///
/// Holds only a channel sender, so cloning is cheap.
#[derive(Clone)]
pub struct TableClient<T: Record> {
    sender: mpsc::Sender<TableRequest<T>>,
}

impl<T: Record> TableClient<T> {
    pub fn new(sender: mpsc::Sender<TableRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> TableRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::TableClosed)?;
        response.await.map_err(|_| StoreError::TableDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<u64, StoreError> {
        self.request(|respond_to| TableRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: u64) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| TableRequest::Get { id, respond_to })
            .await
    }

    /// Fetches every existing record whose id is in `ids`, in ascending id order.
    /// Missing ids are skipped.
    pub async fn get_many(&self, ids: BTreeSet<u64>) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| TableRequest::GetMany { ids, respond_to })
            .await
    }

    /// Fetches every record matching `key`, best rank first.
    pub async fn find(&self, key: impl Into<String>) -> Result<Vec<T>, StoreError> {
        let key = key.into();
        self.request(|respond_to| TableRequest::Find { key, respond_to })
            .await
    }

    pub async fn update(&self, id: u64, update: T::Update) -> Result<T, StoreError> {
        self.request(|respond_to| TableRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: u64) -> Result<(), StoreError> {
        self.request(|respond_to| TableRequest::Delete { id, respond_to })
            .await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
