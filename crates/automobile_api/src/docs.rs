//! OpenAPI description of the REST endpoints and the Swagger UI serving it.
//!
//! The document is derived from the `#[utoipa::path]` annotations in
//! [`crate::rest`] and the `ToSchema` derives on the record types. Descriptive
//! only; nothing routes through it.

use crate::error::ErrorBody;
use crate::rest;
use automobile_core::{Automobile, AutomobileInput, DeleteConfirmation};
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub const DOCS_PATH: &str = "/api-docs";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Automobile API",
        version = "1.0.0",
        description = "API for managing automobiles"
    ),
    paths(
        rest::list_automobiles,
        rest::get_automobile,
        rest::create_automobile,
        rest::update_automobile,
        rest::delete_automobile,
    ),
    components(schemas(Automobile, AutomobileInput, DeleteConfirmation, ErrorBody)),
    tags((name = "automobiles", description = "Automobile records"))
)]
pub struct ApiDoc;

/// Swagger UI at `/api-docs` and the raw document at `/api-docs/openapi.json`.
pub fn router() -> Router {
    SwaggerUi::new(DOCS_PATH)
        .url(OPENAPI_PATH, ApiDoc::openapi())
        .into()
}
