//! Shared types for the key officers lookup service
//!
//! Contains only what both entry points need: process identity, tracing
//! setup, cache location configuration and the shared error type.

pub mod config;
pub mod errors;
pub mod logging;
pub mod types;

pub use config::CacheConfig;
pub use errors::*;
pub use types::*;
