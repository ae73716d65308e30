//! Common test utilities and infrastructure
//!
//! Shared fixtures for the officers integration suites.

pub mod fixtures;

pub use fixtures::TestFixtures;
