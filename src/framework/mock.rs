//! # Mock Framework
//!
//! Utilities for testing table clients in isolation.
//!
//! [`MockClient`] hands out a real [`TableClient`] whose requests are answered from
//! a queue of scripted expectations. A request that does not match the next
//! expectation is never answered, so the caller sees [`StoreError::TableDropped`]
//! and the mismatch is reported by [`MockClient::verify`].

use crate::framework::{Record, StoreError, TableClient, TableRequest};
use std::collections::{BTreeSet, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<T: Record> {
    Get {
        id: u64,
        response: Result<Option<T>, StoreError>,
    },
    GetMany {
        ids: BTreeSet<u64>,
        response: Result<Vec<T>, StoreError>,
    },
    Find {
        key: String,
        response: Result<Vec<T>, StoreError>,
    },
    Create {
        response: Result<u64, StoreError>,
    },
}

struct MockState<T: Record> {
    expectations: VecDeque<Expectation<T>>,
    received: usize,
    mismatches: Vec<String>,
}

/// A mock table with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<User>::new();
/// mock.expect_get_many([1, 2]).return_ok(vec![alice, bob]);
///
/// let client = UserClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met, and nothing else was asked
/// ```
pub struct MockClient<T: Record> {
    client: TableClient<T>,
    state: Arc<Mutex<MockState<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<TableRequest<T>>(100);
        let state = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            received: 0,
            mismatches: Vec::new(),
        }));
        let state_clone = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut state = state_clone.lock().unwrap();
                state.received += 1;
                let expectation = state.expectations.pop_front();

                match (request, expectation) {
                    (TableRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response }))
                        if id == want =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (
                        TableRequest::GetMany { ids, respond_to },
                        Some(Expectation::GetMany { ids: want, response }),
                    ) if ids == want => {
                        let _ = respond_to.send(response);
                    }
                    (TableRequest::Find { key, respond_to }, Some(Expectation::Find { key: want, response }))
                        if key == want =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (TableRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        // Dropping the responder fails the caller with TableDropped.
                        state.mismatches.push(format!("{request:?}"));
                    }
                }
            }
        });

        Self {
            client: TableClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> TableClient<T> {
        self.client.clone()
    }

    /// Number of requests the mock has received so far.
    pub fn received(&self) -> usize {
        self.state.lock().unwrap().received
    }

    /// Expects a `get` for the given id.
    pub fn expect_get(&mut self, id: u64) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `get_many` for exactly the given ids.
    pub fn expect_get_many(
        &mut self,
        ids: impl IntoIterator<Item = u64>,
    ) -> ExpectationBuilder<T, Vec<T>> {
        let ids: BTreeSet<u64> = ids.into_iter().collect();
        self.builder(move |response| Expectation::GetMany { ids, response })
    }

    /// Expects a `find` for the given lookup key.
    pub fn expect_find(&mut self, key: impl Into<String>) -> ExpectationBuilder<T, Vec<T>> {
        let key = key.into();
        self.builder(move |response| Expectation::Find { key, response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, u64> {
        self.builder(|response| Expectation::Create { response })
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            state: self.state.clone(),
        }
    }

    /// Verifies that all expectations were met and no unexpected request arrived.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.mismatches.is_empty() {
            panic!("Unexpected requests: {:?}", state.mismatches);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

impl<T: Record> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder that completes an expectation with its scripted response.
pub struct ExpectationBuilder<T: Record, R> {
    make: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
    state: Arc<Mutex<MockState<T>>>,
}

impl<T: Record, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.make)(response);
        self.state.lock().unwrap().expectations.push_back(expectation);
    }
}
