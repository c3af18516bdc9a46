//! Listing page use-case service.
//!
//! # Responsibility
//! - Provide the create/delete/list/count/search entry points the listing
//!   UI consumes.
//! - Delegate persistence to repository implementations and matching to the
//!   pure query evaluator.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - A failed snapshot read surfaces as `Err`; zero matches surface as
//!   `Ok(vec![])` — callers can always tell the two apart.

use crate::model::visualization::{VizId, VizType, Visualization};
use crate::repo::listing_repo::{ListingRepository, RepoResult};
use crate::search::query;

/// Use-case service wrapper for the visualization listing page.
pub struct ListingService<R: ListingRepository> {
    repo: R,
}

impl<R: ListingRepository> ListingService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a visualization of the given type and returns the stored
    /// record.
    ///
    /// # Contract
    /// - The store assigns identity and creation timestamp.
    /// - An invalid (empty) name fails validation and creates nothing.
    pub fn create_visualization(
        &self,
        kind: VizType,
        name: impl Into<String>,
    ) -> RepoResult<Visualization> {
        let viz = Visualization::new(kind, name)?;
        self.repo.create_visualization(&viz)?;
        Ok(viz)
    }

    /// Creates a markdown visualization, the dominant listing-page flow.
    pub fn create_markdown_visualization(
        &self,
        name: impl Into<String>,
    ) -> RepoResult<Visualization> {
        self.create_visualization(VizType::Markdown, name)
    }

    /// Gets one visualization by stable ID.
    pub fn get_visualization(&self, id: VizId) -> RepoResult<Option<Visualization>> {
        self.repo.get_visualization(id)
    }

    /// Lists the current snapshot in creation order.
    pub fn list_visualizations(&self) -> RepoResult<Vec<Visualization>> {
        self.repo.list_visualizations()
    }

    /// Exact count of stored visualizations.
    pub fn count_visualizations(&self) -> RepoResult<u64> {
        self.repo.count_visualizations()
    }

    /// Deletes one visualization by ID; `Ok(false)` when it did not exist.
    pub fn delete_visualization(&self, id: VizId) -> RepoResult<bool> {
        self.repo.delete_visualization(id)
    }

    /// Deletes every visualization; idempotent. Returns rows removed.
    pub fn delete_all_visualizations(&self) -> RepoResult<usize> {
        self.repo.delete_all_visualizations()
    }

    /// Filters the current snapshot with the listing search semantics.
    ///
    /// Empty or whitespace-only queries return the full listing.
    pub fn search_visualizations(&self, raw_query: &str) -> RepoResult<Vec<Visualization>> {
        let snapshot = self.repo.list_visualizations()?;
        let matches = query::search(&snapshot, raw_query)
            .into_iter()
            .cloned()
            .collect();
        Ok(matches)
    }
}
