//! # Directory Lifecycle
//!
//! Starts, wires and stops the tables behind the resolver.
//!
//! 1. **Table creation** - one [`TableActor`](crate::framework::TableActor) per actor kind
//! 2. **Registry** - the [`KindRegistry`](crate::store::KindRegistry) is built once,
//!    from clones of the table clients, and passed to every resolver
//! 3. **Shutdown** - dropping every client closes the channels; the tables log
//!    their final size and exit
//!
//! Observability is set up separately with [`setup_tracing`]; see the
//! [`tracing`] module for what each level shows.

pub mod directory;
pub mod tracing;

pub use directory::*;
pub use tracing::*;
