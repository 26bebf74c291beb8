//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, body limit, optional timeout)
//! - Bind server to listener
//! - Stop on Ctrl+C or a broadcast shutdown signal

use axum::{
    body::Body,
    extract::FromRef,
    http::Request,
    middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{ErrorStatusPolicy, ServiceConfig};
use crate::http::handlers;
use crate::http::request::{request_id_of, UuidRequestId};
use crate::http::response::ApiError;
use crate::observability::metrics;
use crate::rules::{CategoryRules, ProductRules, RuleError};
use crate::store::Gateway;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryRules,
    pub products: ProductRules,
    pub error_status: ErrorStatusPolicy,
}

impl AppState {
    pub fn new(gateway: Gateway, error_status: ErrorStatusPolicy) -> Self {
        Self {
            categories: CategoryRules::new(gateway.clone()),
            products: ProductRules::new(gateway),
            error_status,
        }
    }

    /// Attach the configured status policy to a rule error.
    pub fn fail(&self, error: RuleError) -> ApiError {
        ApiError::new(error, self.error_status)
    }
}

impl FromRef<AppState> for ErrorStatusPolicy {
    fn from_ref(state: &AppState) -> Self {
        state.error_status
    }
}

/// HTTP server for the catalog service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server over an already-connected gateway.
    pub fn new(config: ServiceConfig, gateway: Gateway) -> Self {
        let state = AppState::new(gateway, config.http.error_status);
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route(
                "/categoria",
                get(handlers::list_categories).post(handlers::create_category),
            )
            .route(
                "/categoria/{id}",
                get(handlers::get_category)
                    .put(handlers::update_category)
                    .delete(handlers::delete_category),
            )
            .route("/producto", post(handlers::create_product))
            .route_layer(middleware::from_fn(metrics::track_requests))
            .route("/health", get(handlers::health))
            .with_state(state);

        if let Some(secs) = config.http.request_timeout_secs {
            router = router.layer(TimeoutLayer::new(Duration::from_secs(secs)));
        }

        router.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id_of(request),
                    )
                }))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(RequestBodyLimitLayer::new(config.http.max_body_bytes)),
        )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            error_status = ?self.config.http.error_status,
            "Listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for Ctrl+C or the broadcast shutdown signal.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutdown signal received"),
        _ = shutdown.recv() => tracing::info!("Shutdown requested"),
    }
}
