//! Type-safe wrappers around [`TableClient`](crate::framework::TableClient).

pub mod record_client;
pub mod team_client;
pub mod user_client;

pub use record_client::*;
pub use team_client::*;
pub use user_client::*;
