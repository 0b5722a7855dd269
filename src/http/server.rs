//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, logging, CORS, body limit)
//! - Bind server to listener
//! - Stop accepting on shutdown and drain in-flight requests

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
};

use crate::config::ServerConfig;
use crate::http::{handlers, middleware::log_request};
use crate::sweep::SweepService;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub sweeper: Arc<SweepService>,
    pub version: &'static str,
}

/// HTTP server for the sweep service.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server around a sweep service.
    pub fn new(config: ServerConfig, sweeper: Arc<SweepService>) -> Self {
        let state = AppState {
            sweeper,
            version: env!("CARGO_PKG_VERSION"),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(config: &ServerConfig, state: AppState) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/sweep/eth", post(handlers::sweep_eth))
            .with_state(state)
            // Innermost: it rewrites the request body type.
            .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(middleware::from_fn(log_request))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(cors),
            )
    }

    /// A clone of the router, for driving the app without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            max_body_bytes = self.config.max_body_bytes,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
