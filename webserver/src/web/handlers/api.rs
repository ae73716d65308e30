//! REST API handlers
//!
//! Transport only: extract and validate parameters, hand them to the lookup
//! service and return its payload verbatim.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::HeaderMap;

use officers::{CacheReader, DEFAULT_TOP_N, KeyOfficersResponse};
use shared::{ProcessId, process_debug};

use crate::error::{WebServerError, WebServerResult};
use crate::types::{HealthResponse, KeyOfficersQuery, PingResponse};
use crate::webserver_impl::WebServer;

/// Health check endpoint - /healthz
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Liveness message endpoint - /ping
pub async fn ping<R>(
    State(webserver): State<WebServer<R>>,
    headers: HeaderMap,
) -> WebServerResult<Json<PingResponse>>
where
    R: CacheReader + 'static,
{
    webserver.authorize(&headers)?;
    Ok(Json(PingResponse {
        message: webserver.service().ping().to_string(),
    }))
}

/// Key officers lookup endpoint - /key-officers?company=..&top_n=..
pub async fn key_officers<R>(
    State(webserver): State<WebServer<R>>,
    headers: HeaderMap,
    query: Result<Query<KeyOfficersQuery>, QueryRejection>,
) -> WebServerResult<Json<KeyOfficersResponse>>
where
    R: CacheReader + 'static,
{
    webserver.authorize(&headers)?;

    let Query(query) = query.map_err(|rejection| {
        process_debug!(ProcessId::current(), "Rejected lookup query: {}", rejection);
        WebServerError::invalid_request(rejection.body_text())
    })?;
    let top_n = query.top_n.unwrap_or(DEFAULT_TOP_N);

    let response = webserver
        .service()
        .get_key_officers(&query.company, top_n)
        .await;
    Ok(Json(response))
}
