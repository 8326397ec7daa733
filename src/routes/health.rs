//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns `{"ok": true}` whenever the process
//! can run a handler. Used by Kubernetes, ECS, systemd, and load balancers to
//! verify the service is alive.

use axum::{http::Uri, response::Redirect, Json};
use serde::Serialize;
use utoipa::ToSchema;

pub const HEALTH_PATH: &str = "/health";

/// Liveness payload. Built fresh for every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthStatus {
    pub ok: bool,
}

impl HealthStatus {
    pub const fn alive() -> Self {
        Self { ok: true }
    }
}

/// Health check handler.
///
/// Takes no extractors, so query strings and request bodies are never read.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthStatus)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::alive())
}

/// `GET /health/` answers with a temporary redirect to `/health`, keeping the
/// query string.
pub async fn redirect_trailing_slash(uri: Uri) -> Redirect {
    let target = match uri.query() {
        Some(query) => format!("{HEALTH_PATH}?{query}"),
        None => HEALTH_PATH.to_string(),
    };
    Redirect::temporary(&target)
}
