//! Router construction and server lifecycle.

use axum::{
    body::Body,
    middleware::from_fn,
    routing::{get, post},
    Extension, Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    cors::permissive_cors,
    metrics::metrics_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

use crate::config::OriiConfig;
use crate::handlers;
use crate::ApiDoc;

/// Builds the full router: JSON API under the configured prefix, `/metrics` at the root, and
/// the shared middleware stack on every route including the fallback.
pub fn build_router(config: &OriiConfig) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/model-info", get(handlers::model_info))
        .route("/contact", post(handlers::submit_contact))
        .route("/demo", post(handlers::demo_request))
        .route("/openapi.json", get(handlers::openapi_spec))
        .layer(Extension(Arc::new(ApiDoc::with_prefix(&config.api_prefix))));

    // axum refuses to nest at "/", so an empty prefix mounts the routes directly.
    let router = if config.api_prefix.is_empty() {
        Router::new().merge(api)
    } else {
        Router::new().nest(&config.api_prefix, api)
    };

    router
        .route("/metrics", get(handlers::metrics_endpoint))
        .fallback(handlers::not_found)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(from_fn(request_id_middleware))
        .layer(permissive_cors())
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Bind the listener and assemble the router (port 0 = random port for testing).
    pub async fn build(config: OriiConfig) -> Result<Self, AppError> {
        let address = config.common.bind_address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            service = %config.service_name,
            api_prefix = %config.api_prefix,
            "HTTP listener bound on port {}",
            port
        );

        Ok(Self {
            port,
            listener,
            router: build_router(&config),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until SIGINT/SIGTERM, then drain in-flight requests.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
