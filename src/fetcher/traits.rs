//! Trait for proposal page retrieval

use crate::error::FetchError;
use async_trait::async_trait;
use std::sync::Arc;

/// Outcome of fetching one page: its text, or why it could not be fetched
pub type FetchResult = std::result::Result<String, FetchError>;

/// Source of raw proposal pages, keyed by numeric identifier
///
/// Implementations never panic on a bad page and never return a crate-level
/// error: every failure is reported as a categorized [`FetchError`] so the
/// crawler can log it and continue with the next identifier.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Retrieve the page for `id`
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing the failure category when the page
    /// cannot be retrieved.
    async fn fetch(&self, id: u64) -> FetchResult;

    /// Human-readable name for logging
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Arc<T> {
    async fn fetch(&self, id: u64) -> FetchResult {
        (**self).fetch(id).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
