//! Key officers lookup library
//!
//! Reads cached officer documents for a company from the World Registry and
//! PDS caches, normalizes both shapes into a canonical name -> titles map,
//! merges them and renders a capped summary of all three views.

pub mod core;
pub mod error;
pub mod lookup_impl;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use error::{OfficersError, OfficersResult};
pub use lookup_impl::KeyOfficersService;
pub use types::*;

// Re-export trait definitions
pub use traits::{CacheReader, MockCacheReader};

// Re-export service implementations
pub use services::RealCacheReader;
