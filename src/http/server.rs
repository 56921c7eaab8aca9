//! HTTP server setup and ingest handlers.
//!
//! # Responsibilities
//! - Create Axum Router with the ingest and liveness handlers
//! - Wire up middleware (tracing, body limit, timeout, request ID)
//! - Bind server to listener, serve until shutdown fires
//! - Append accepted payloads to the raw capture files

use std::time::Duration;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::HttpConfig;
use crate::observability::metrics;
use crate::storage::{RawStore, SampleKind};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: RawStore,
}

/// HTTP server for the ingest sink.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: &HttpConfig, store: RawStore) -> Self {
        let state = AppState { store };
        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &HttpConfig, state: AppState) -> Router {
        Router::new()
            .route("/adc_samples", post(adc_samples))
            .route("/i2s_samples", post(i2s_samples))
            .route("/healthz", get(healthz))
            .with_state(state)
            // Axum's built-in limit would shadow the configured one.
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP ingest server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP ingest server stopped");
        Ok(())
    }
}

/// 16-bit single-channel samples from the ADC.
async fn adc_samples(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    ingest(state, SampleKind::Adc, body).await
}

/// 32-bit stereo-channel samples from the I2S microphones.
async fn i2s_samples(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    ingest(state, SampleKind::I2s, body).await
}

async fn ingest(state: AppState, kind: SampleKind, body: Bytes) -> (StatusCode, &'static str) {
    tracing::info!(kind = %kind, bytes = body.len(), "received samples over HTTP");

    match state.store.append(kind, &body).await {
        Ok(written) => {
            metrics::record_ingest(kind.as_str(), "http", written as u64);
            (StatusCode::OK, "OK")
        }
        Err(e) => {
            tracing::error!(
                kind = %kind,
                file = %state.store.path(kind).display(),
                error = %e,
                "failed to append samples"
            );
            metrics::record_write_error(kind.as_str());
            (StatusCode::INTERNAL_SERVER_ERROR, "Error")
        }
    }
}

/// Liveness probe.
async fn healthz() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
