//! Webserver library for the key officers lookup service
//!
//! Exposes the lookup over HTTP: a health check, a ping and the
//! `/key-officers` query endpoint.

pub mod error;
pub mod state;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use types::*;
pub use webserver_impl::WebServer;
