//! User-specific table logic and record implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::framework::TableActor;
use crate::model::User;

/// Creates a new User table and its client.
pub fn new(buffer_size: usize) -> (TableActor<User>, UserClient) {
    let (actor, generic_client) = TableActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}
