//! Marketing Hub Scrapers: liveness service.
//!
//! A single process-wide Axum router answering `GET /health` with
//! `{"ok": true}`, plus an API description at `/openapi.json` rendered by
//! Swagger UI at `/docs`.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
