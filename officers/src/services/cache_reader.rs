//! Real cache reader service implementation
//!
//! Each source is one JSON file shaped `{ "<company>": { ...document... } }`.
//! The whole file is read and parsed on every lookup; nothing is held
//! between requests.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use shared::{ProcessId, process_debug, process_warn};

use crate::core::document::empty_document;
use crate::error::{OfficersError, OfficersResult};
use crate::traits::CacheReader;
use crate::types::{RawDocument, Source};

/// File-backed cache reader
#[derive(Debug, Clone, Default)]
pub struct RealCacheReader {
    config: shared::CacheConfig,
}

impl RealCacheReader {
    /// Create a reader over the configured cache directory
    pub fn new(config: shared::CacheConfig) -> Self {
        Self { config }
    }

    /// Cache file backing a source
    pub fn source_path(&self, source: Source) -> PathBuf {
        match source {
            Source::WorldRegistry => self.config.world_registry_path(),
            Source::Pds => self.config.pds_path(),
        }
    }

    /// Fetch a company's document, reporting why it is unavailable
    pub async fn try_fetch(&self, source: Source, company: &str) -> OfficersResult<RawDocument> {
        let path = self.source_path(source);

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return Err(OfficersError::CacheNotFound { cache: source, path });
            }
            Err(error) => {
                return Err(OfficersError::CacheReadFailed { cache: source, path, error });
            }
        };

        let root: Value = match serde_json::from_str(&content) {
            Ok(root) => root,
            Err(error) => {
                return Err(OfficersError::CacheParseFailed { cache: source, path, error });
            }
        };

        let Value::Object(mut companies) = root else {
            return Err(OfficersError::CacheRootNotObject { cache: source, path });
        };

        companies
            .remove(company)
            .ok_or_else(|| OfficersError::CompanyNotFound {
                cache: source,
                company: company.to_string(),
            })
    }
}

#[async_trait]
impl CacheReader for RealCacheReader {
    async fn fetch(&self, source: Source, company: &str) -> RawDocument {
        match self.try_fetch(source, company).await {
            Ok(document) => document,
            Err(e) if e.is_miss() => {
                process_debug!(ProcessId::current(), "📭 {}", e);
                empty_document()
            }
            Err(e) => {
                process_warn!(ProcessId::current(), "⚠️ {}: {}", e, source_chain(&e));
                empty_document()
            }
        }
    }
}

fn source_chain(error: &OfficersError) -> String {
    std::error::Error::source(error)
        .map(|cause| cause.to_string())
        .unwrap_or_default()
}
