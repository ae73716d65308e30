//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use uuid::Uuid;

/// Global process ID singleton - set once at startup
static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Identity reported when no entry point has claimed the process (tests, embedding)
static EMBEDDED: ProcessId = ProcessId::Embedded;

/// Process identifier for any entry point in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// HTTP server process
    WebServer,
    /// One-shot command line lookup
    Cli,
    /// Library used from another host, no entry point initialised
    Embedded,
}

impl ProcessId {
    /// Initialize the global process ID for the webserver
    pub fn init_webserver() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::WebServer)
    }

    /// Initialize the global process ID for the command line tool
    pub fn init_cli() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Cli)
    }

    /// Get the global process ID, `Embedded` until an entry point claims it
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get().unwrap_or(&EMBEDDED)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::WebServer => write!(f, "webserver"),
            ProcessId::Cli => write!(f, "cli"),
            ProcessId::Embedded => write!(f, "embedded"),
        }
    }
}

/// Correlates the log lines of a single lookup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_id_display() {
        assert_eq!(ProcessId::WebServer.to_string(), "webserver");
        assert_eq!(ProcessId::Cli.to_string(), "cli");
        assert_eq!(ProcessId::Embedded.to_string(), "embedded");
    }

    #[test]
    fn test_request_ids_are_unique() {
        let first = RequestId::new();
        let second = RequestId::new();
        assert_ne!(first, second);
        assert_eq!(first.to_string().len(), 36);
    }
}
