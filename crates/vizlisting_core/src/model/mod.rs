//! Domain model for listed visualizations.
//!
//! # Responsibility
//! - Define the canonical visualization record used by core business logic.
//! - Enforce name/identity validation before anything is persisted.
//!
//! # Invariants
//! - Every visualization is identified by a stable, non-nil `VizId`.
//! - Names are non-empty user text; duplicates are allowed.

pub mod visualization;
