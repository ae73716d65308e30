//! Main webserver implementation
//!
//! The WebServer struct owns the lookup service (with its injected cache
//! reader) and the read-only server state, and exposes them over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderMap;
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use officers::{CacheReader, KeyOfficersService};
use shared::{ProcessId, logging, process_info};

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::types::API_KEY_HEADER;
use crate::web::handlers::api;

/// Main webserver struct with dependency injection
pub struct WebServer<R: CacheReader> {
    state: Arc<WebServerState>,
    service: KeyOfficersService<R>,
}

impl<R: CacheReader> Clone for WebServer<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            service: self.service.clone(),
        }
    }
}

impl<R> WebServer<R>
where
    R: CacheReader + 'static,
{
    /// Create a new webserver around a cache reader
    pub fn new(bind_address: SocketAddr, api_key: Option<String>, reader: R) -> Self {
        Self {
            state: Arc::new(WebServerState::new(bind_address, api_key)),
            service: KeyOfficersService::new(reader),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Liveness
            .route("/healthz", get(api::healthz))
            .route("/ping", get(api::ping::<R>))
            // Lookup
            .route("/key-officers", get(api::key_officers::<R>))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve until Ctrl+C
    pub async fn run(&self) -> WebServerResult<()> {
        let router = self.build_router();
        let bind_address = self.state.bind_address;

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| {
                WebServerError::ServerStartup(format!("Failed to bind to {bind_address}: {e}"))
            })?;

        process_info!(ProcessId::current(), "🌐 Web server listening on http://{}", bind_address);
        if self.state.requires_api_key() {
            process_info!(ProcessId::current(), "🔒 API key required via {} header", API_KEY_HEADER);
        }

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }

    pub fn service(&self) -> &KeyOfficersService<R> {
        &self.service
    }

    /// Reject the request unless it carries the configured API key
    pub fn authorize(&self, headers: &HeaderMap) -> WebServerResult<()> {
        let provided = headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());
        if self.state.is_authorized(provided) {
            Ok(())
        } else {
            Err(WebServerError::Unauthorized)
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(ProcessId::current(), "Received Ctrl+C signal"),
        Err(err) => {
            logging::log_error(ProcessId::current(), "Signal handling", &err);
            // Without a signal handler, run until the process is killed
            std::future::pending::<()>().await;
        }
    }
}
