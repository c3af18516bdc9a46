//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the listing store contract consumed by service/UI layers.
//! - Isolate SQLite query details from search and orchestration code.
//!
//! # Invariants
//! - Repository writes must enforce `Visualization::validate()` before
//!   persistence.
//! - `count` always reflects the exact number of stored rows; deletes are
//!   hard deletes, never tombstones.

pub mod listing_repo;
