//! HTTP route handlers.
//!
//! Routes carry per-route Cache-Control headers: the liveness probe is never
//! cacheable, the API description and docs page may be cached briefly.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod docs;
pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_DOCS, CACHE_CONTROL_HEALTH};
use crate::error::{method_not_allowed, not_found};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes, fallbacks, and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route(health::HEALTH_PATH, get(health::health))
        .route("/health/", get(health::redirect_trailing_slash))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    // API description and Swagger UI - short public cache
    let docs_routes = docs::docs_routes::<AppState>(&state.config.service).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_DOCS),
        ),
    );

    Router::new()
        .merge(health_routes)
        .merge(docs_routes)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
