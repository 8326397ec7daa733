//! API description and interactive documentation.
//!
//! The OpenAPI document is generated from the handler annotations and the
//! response types, then stamped with the configured service identity. Swagger
//! UI serves it at `/docs` alongside the raw document at `/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServiceConfig;
use crate::routes::health::{self, HealthStatus};

/// Interactive documentation page
pub const DOCS_PATH: &str = "/docs";

/// Raw OpenAPI document
pub const OPENAPI_PATH: &str = "/openapi.json";

/// OpenAPI specification for the liveness service
#[derive(OpenApi)]
#[openapi(
    paths(health::health),
    components(schemas(HealthStatus)),
    tags(
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI document for the configured service identity.
pub fn openapi_document(service: &ServiceConfig) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = service.title.clone();
    doc.info.version = service.version.clone();
    doc
}

/// Swagger UI plus the document it renders.
pub fn docs_routes<S>(service: &ServiceConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new(DOCS_PATH)
        .url(OPENAPI_PATH, openapi_document(service))
        .into()
}
