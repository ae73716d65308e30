//! HTTP request and response bodies owned by the transport

use serde::{Deserialize, Serialize};

/// Header carrying the optional API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Query string of `GET /key-officers`
#[derive(Debug, Clone, Deserialize)]
pub struct KeyOfficersQuery {
    pub company: String,
    #[serde(default)]
    pub top_n: Option<usize>,
}

/// `GET /healthz`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// `GET /ping`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
