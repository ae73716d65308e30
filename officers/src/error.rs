//! Officers-specific error types
//!
//! Every variant means the same thing to a caller: the source had no usable
//! document for the company. The cache reader absorbs them into an empty
//! document; they exist so the absorption can be logged precisely.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::Source;

#[derive(Error, Debug)]
pub enum OfficersError {
    #[error("{cache} cache not found at {}", .path.display())]
    CacheNotFound { cache: Source, path: PathBuf },

    #[error("{cache} cache could not be read from {}", .path.display())]
    CacheReadFailed {
        cache: Source,
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("{cache} cache at {} is not valid JSON", .path.display())]
    CacheParseFailed {
        cache: Source,
        path: PathBuf,
        #[source]
        error: serde_json::Error,
    },

    #[error("{cache} cache at {} is not keyed by company", .path.display())]
    CacheRootNotObject { cache: Source, path: PathBuf },

    #[error("{cache} cache has no entry for company '{company}'")]
    CompanyNotFound { cache: Source, company: String },
}

impl OfficersError {
    /// An ordinary miss rather than a broken cache
    pub fn is_miss(&self) -> bool {
        matches!(
            self,
            OfficersError::CacheNotFound { .. } | OfficersError::CompanyNotFound { .. }
        )
    }

    /// Source the failure came from
    pub fn cache(&self) -> Source {
        match self {
            OfficersError::CacheNotFound { cache, .. }
            | OfficersError::CacheReadFailed { cache, .. }
            | OfficersError::CacheParseFailed { cache, .. }
            | OfficersError::CacheRootNotObject { cache, .. }
            | OfficersError::CompanyNotFound { cache, .. } => *cache,
        }
    }
}

pub type OfficersResult<T> = Result<T, OfficersError>;
