#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Actor Resolver
//!
//! > **Turn loosely-typed actor identifiers into users and teams.**
//!
//! An *actor* is anything that can own work: a single user or a team. API callers
//! name actors in several ways (`42`, `"42"`, `"user:42"`, `"team:7"`,
//! `"maiseythedog"`, `"maisey@dogsrule.com"`). This crate parses those into typed
//! [`ActorRef`](actor::ActorRef)s and fetches the entities behind them, one query
//! per kind no matter how large the batch.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Values ([`actor`])
//! - **Role**: [`ActorKind`](actor::ActorKind), [`ActorRef`](actor::ActorRef) and its
//!   `"kind:id"` form, the identifier [`parse`](actor::parse)r, and
//!   [`ActorField`](actor::ActorField) for API payloads.
//!
//! ### 2. The Resolver ([`resolver`])
//! - **Role**: [`ActorResolver`](resolver::ActorResolver) with `resolve_one`,
//!   `resolve_many` (omits what is missing) and `resolve_dict` (fails on anything missing).
//!
//! ### 3. The Store Contract ([`store`])
//! - **Role**: [`EntityStore`](store::EntityStore), what the resolver reads through, and
//!   [`KindRegistry`](store::KindRegistry), which dispatches to one
//!   [`KindStore`](store::KindStore) per kind.
//!
//! ### 4. The Engine ([`framework`])
//! - **Role**: the generic [`TableActor`](framework::TableActor) that owns every record of
//!   one kind in its own Tokio task, and the cloneable [`TableClient`](framework::TableClient).
//!
//! ### 5. The Tables ([`user_table`], [`team_table`], [`clients`], [`model`])
//! - **Role**: the concrete [`Record`](framework::Record) implementations, their errors,
//!   and typed clients.
//!
//! ### 6. The Orchestrator ([`lifecycle`], [`config`])
//! - **Role**: [`DirectorySystem`](lifecycle::DirectorySystem) starts the tables, builds
//!   the registry once, and shuts everything down.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run tests
//! cargo test
//! ```

pub mod actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod resolver;
pub mod store;
pub mod team_table;
pub mod user_table;
