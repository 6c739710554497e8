//! # Actor References
//!
//! An *actor* is anything that can be assigned ownership: a single [`User`] or a
//! [`Team`]. This module holds the value types that name actors and the parser
//! that turns loosely-typed identifiers into them.
//!
//! ## Structure
//!
//! - [`kind`] - [`ActorKind`], the two-valued discriminator
//! - [`reference`] - [`ActorRef`], the `(id, kind)` value and its `"kind:id"` form
//! - [`resolved`] - [`ResolvedActor`], a fetched user or team
//! - [`parser`] - identifier disambiguation ([`parse`])
//! - [`field`] - [`ActorField`], lenient input/output conversion for API payloads
//! - [`error`] - [`ParseError`] and [`FieldError`]
//!
//! [`User`]: crate::model::User
//! [`Team`]: crate::model::Team

pub mod error;
pub mod field;
pub mod kind;
pub mod parser;
pub mod reference;
pub mod resolved;

pub use error::*;
pub use field::ActorField;
pub use kind::ActorKind;
pub use parser::{parse, ActorIdentifier};
pub use reference::ActorRef;
pub use resolved::ResolvedActor;
