//! Trait definitions with mockall annotations for testing
//!
//! The cache store is the only I/O the lookup performs, so it is the one seam
//! abstracted for dependency injection.

use async_trait::async_trait;

use crate::types::{RawDocument, Source};

/// Keyed document store addressed by (source, company)
#[mockall::automock]
#[async_trait]
pub trait CacheReader: Send + Sync {
    /// Fetch the cached document for a company from one source
    ///
    /// Never fails: any retrieval problem yields an empty object.
    async fn fetch(&self, source: Source, company: &str) -> RawDocument;
}
