//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Table lifecycle**: startup and shutdown, with the final row count
//! - **Table operations**: Create, Get, GetMany, Find, Update, Delete
//! - **Resolution**: `parse`, `resolve_one`, `resolve_many` and `resolve_dict`
//!   spans, with the batch size as a field
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle and writes only
//! RUST_LOG=info cargo run
//!
//! # Every lookup, with requested/found counts per bulk fetch
//! RUST_LOG=debug cargo run
//!
//! # Only the resolver
//! RUST_LOG=actor_resolver::resolver=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, resolving a mixed batch reads like:
//!
//! ```text
//! DEBUG resolve_many: Bulk fetch kind=user count=2 requested=4
//! DEBUG GetMany table="User" requested=2 found=2
//! DEBUG resolve_many: Bulk fetch kind=team count=2 requested=4
//! DEBUG GetMany table="Team" requested=2 found=1
//! DEBUG resolve_many: Resolved batch resolved=3 requested=4
//! ```
//!
//! Two bulk fetches for four references: one per kind.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // table names are logged as a field instead
        .compact()
        .init();
}
