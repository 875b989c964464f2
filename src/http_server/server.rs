//! # HTTP Server
//!
//! Combines the submission, newsletter and health routers into one Axum
//! server with CORS and request tracing.

use std::io;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::submissions::{InMemorySubmissionStore, SubmissionStore};

use super::config::HttpServerConfig;
use super::contact_routes::contact_routes;
use super::newsletter_routes::newsletter_routes;
use super::observability_routes::health_routes;

/// HTTP server for the portfolio site backend
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration and an empty store
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration and an empty store
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_store(config, Arc::new(InMemorySubmissionStore::new()))
    }

    /// Create a new HTTP server backed by the given store
    pub fn with_store(config: HttpServerConfig, store: Arc<dyn SubmissionStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        if config.cors_origins.is_empty() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|s| match s.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!(origin = %s, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, store: Arc<dyn SubmissionStore>) -> Router {
        let api = contact_routes(store.clone()).merge(newsletter_routes(store));

        Router::new()
            .merge(health_routes())
            .nest("/api", api)
            .layer(TraceLayer::new_for_http())
            .layer(Self::cors_layer(config))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured host and port; host names are resolved
    pub async fn bind(&self) -> io::Result<TcpListener> {
        TcpListener::bind((self.config.host.as_str(), self.config.port)).await
    }

    /// Bind and serve until the listener fails
    pub async fn start(self) -> io::Result<()> {
        let listener = self.bind().await?;
        let addr = listener.local_addr()?;

        tracing::info!(%addr, "portfolio API listening");
        tracing::info!("  POST /api/contact");
        tracing::info!("  POST /api/newsletter/subscribe");
        tracing::info!("  GET  /health");

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
