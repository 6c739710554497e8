//! Generic table framework for the in-process entity store.
//!
//! This module provides the building blocks every entity kind is stored with:
//! one actor per kind, owning its rows, reached through a typed client.
//!
//! # Main Components
//!
//! - [`Record`] - Trait that stored entity types implement
//! - [`TableActor`] - Generic actor that owns all records of one kind
//! - [`TableClient`] - Type-safe, cloneable handle for sending requests
//! - [`StoreError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to script table responses without spawning real tables.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
