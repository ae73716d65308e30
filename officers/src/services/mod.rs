//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod cache_reader;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use cache_reader::RealCacheReader;
