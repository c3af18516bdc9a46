//! Listing search entry points.
//!
//! # Responsibility
//! - Expose the pure query evaluator used by the listing page filter.
//! - Keep matching semantics in one place, independent of storage.

pub mod query;
