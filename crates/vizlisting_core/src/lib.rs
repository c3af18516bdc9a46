//! Core domain logic for the visualization listing page.
//! This crate is the single source of truth for listing and search
//! invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::visualization::{VizId, VizType, VizValidationError, Visualization};
pub use repo::listing_repo::{
    ListingRepository, RepoError, RepoResult, SqliteListingRepository,
};
pub use search::query::{name_matches, search, term_matches, tokenize};
pub use service::listing_service::ListingService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
