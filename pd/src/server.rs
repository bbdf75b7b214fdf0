//! HTTP endpoint and embedded form UI

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use eyre::{Context, Result};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::domain::{GenerationRequest, GenerationResult};
use crate::generator::PostGenerator;

/// Single-page form served at `/`
const INDEX_HTML: &str = include_str!("../web/index.html");

/// Body of every failed generation; details stay in the log
pub const GENERIC_ERROR: &str = "Failed to generate";

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn generation_failed() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: GENERIC_ERROR.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn build_router(generator: Arc<PostGenerator>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/api/generate", post(generate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(generator)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub async fn run_serve(generator: Arc<PostGenerator>, bind: &str, port: u16) -> Result<()> {
    let app = build_router(generator);
    let addr: SocketAddr = format!("{bind}:{port}")
        .parse()
        .context(format!("Invalid bind address {bind}:{port}"))?;
    info!("postdraft listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    info!("postdraft server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "shutdown_signal: failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn generate(
    State(generator): State<Arc<PostGenerator>>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResult>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        error!(error = %rejection.body_text(), "generate: rejected request body");
        AppError::generation_failed()
    })?;
    debug!(topic = %request.topic, post_count = %request.post_count, "generate: called");

    match generator.generate(request).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            error!(error = %e, upstream_status = ?e.upstream_status(), "generate: generation failed");
            Err(AppError::generation_failed())
        }
    }
}
