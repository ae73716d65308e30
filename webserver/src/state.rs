//! Webserver state management
//!
//! Read-only after startup; shared between handlers behind an `Arc`.

use std::net::SocketAddr;

/// Core webserver state
#[derive(Debug)]
pub struct WebServerState {
    // Server configuration
    pub bind_address: SocketAddr,
    pub api_key: Option<String>,
}

impl WebServerState {
    /// Create a new webserver state
    pub fn new(bind_address: SocketAddr, api_key: Option<String>) -> Self {
        Self {
            bind_address,
            api_key: api_key.filter(|key| !key.is_empty()),
        }
    }

    /// Whether requests must present an API key
    pub fn requires_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Check a presented key; anything passes when no key is configured
    pub fn is_authorized(&self, provided: Option<&str>) -> bool {
        match &self.api_key {
            None => true,
            Some(expected) => provided == Some(expected.as_str()),
        }
    }
}
