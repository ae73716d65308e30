//! Service tests for officers
//!
//! Tests run against real files in a temporary cache directory.
