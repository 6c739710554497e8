//! Pure data structures implementing the [`Record`](crate::framework::Record) trait.

pub mod team;
pub mod user;

pub use team::*;
pub use user::*;
