//! Cache location configuration
//!
//! Each source is a single JSON file keyed by company name, living in one
//! cache directory.

use std::path::{Path, PathBuf};

use crate::errors::{SharedError, SharedResult};

pub const CACHE_DIR_ENV: &str = "KEY_OFFICERS_CACHE_DIR";
pub const WORLD_REGISTRY_FILE_ENV: &str = "KEY_OFFICERS_WR_FILE";
pub const PDS_FILE_ENV: &str = "KEY_OFFICERS_PDS_FILE";

pub const DEFAULT_CACHE_DIR: &str = "cache/json";
pub const DEFAULT_WORLD_REGISTRY_FILE: &str = "WR_Data.json";
pub const DEFAULT_PDS_FILE: &str = "PDS_Data.json";

/// Where the per-source cache files live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub cache_dir: PathBuf,
    pub world_registry_file: String,
    pub pds_file: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            world_registry_file: DEFAULT_WORLD_REGISTRY_FILE.to_string(),
            pds_file: DEFAULT_PDS_FILE.to_string(),
        }
    }
}

impl CacheConfig {
    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> SharedResult<Self> {
        // Missing .env is the common case
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> SharedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(CACHE_DIR_ENV) {
            config.cache_dir = non_blank(CACHE_DIR_ENV, dir)?.into();
        }
        if let Some(file) = lookup(WORLD_REGISTRY_FILE_ENV) {
            config.world_registry_file = non_blank(WORLD_REGISTRY_FILE_ENV, file)?;
        }
        if let Some(file) = lookup(PDS_FILE_ENV) {
            config.pds_file = non_blank(PDS_FILE_ENV, file)?;
        }

        Ok(config)
    }

    /// Override the cache directory, keeping file names
    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = cache_dir.into();
        self
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn world_registry_path(&self) -> PathBuf {
        self.cache_dir.join(&self.world_registry_file)
    }

    pub fn pds_path(&self) -> PathBuf {
        self.cache_dir.join(&self.pds_file)
    }
}

fn non_blank(field: &str, value: String) -> SharedResult<String> {
    if value.trim().is_empty() {
        return Err(SharedError::InvalidConfig {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}
