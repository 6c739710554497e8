//! Team-specific table logic and record implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::TeamClient;
use crate::framework::TableActor;
use crate::model::Team;

/// Creates a new Team table and its client.
pub fn new(buffer_size: usize) -> (TableActor<Team>, TeamClient) {
    let (actor, generic_client) = TableActor::new(buffer_size);
    (actor, TeamClient::new(generic_client))
}
