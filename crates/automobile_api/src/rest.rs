//! REST adapter.
//!
//! | Method | Path                   | Operation    | Status |
//! |--------|------------------------|--------------|--------|
//! | GET    | /api/automobiles       | list_all     | 200    |
//! | GET    | /api/automobiles/{id}  | get_by_id    | 200    |
//! | POST   | /api/automobiles       | create       | 201    |
//! | PUT    | /api/automobiles/{id}  | update       | 200    |
//! | DELETE | /api/automobiles/{id}  | delete_by_id | 200    |
//!
//! A missing record is `200` with a JSON `null` body. Malformed ids and
//! bodies are reported like any other failure, as `500 {"error": ...}`,
//! including POST/PUT requests without a JSON `Content-Type` or with an
//! empty body.
//!
//! Each handler carries the `#[utoipa::path]` annotation that
//! [`crate::docs`] builds the OpenAPI document from.

use crate::error::{ApiError, ErrorBody};
use crate::state::AppState;
use automobile_core::{Automobile, AutomobileId, AutomobileInput, DeleteConfirmation};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

pub const AUTOMOBILES_PATH: &str = "/api/automobiles";
pub const AUTOMOBILE_PATH: &str = "/api/automobiles/{id}";

type IdParam = Result<Path<i64>, PathRejection>;
type InputBody = Result<Json<AutomobileInput>, JsonRejection>;

/// Routes for the five REST endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            AUTOMOBILES_PATH,
            get(list_automobiles).post(create_automobile),
        )
        .route(
            AUTOMOBILE_PATH,
            get(get_automobile)
                .put(update_automobile)
                .delete(delete_automobile),
        )
}

/// Get all automobiles.
#[utoipa::path(
    get,
    path = "/api/automobiles",
    tag = "automobiles",
    responses(
        (status = 200, description = "Every automobile, in insertion order", body = [Automobile]),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub(crate) async fn list_automobiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Automobile>>, ApiError> {
    let automobiles = state.run(|service| service.list_all()).await?;
    Ok(Json(automobiles))
}

/// Get an automobile by ID.
#[utoipa::path(
    get,
    path = "/api/automobiles/{id}",
    tag = "automobiles",
    params(("id" = i64, Path, description = "Automobile id")),
    responses(
        (status = 200, description = "The automobile, or null when the id is unknown", body = Automobile),
        (status = 500, description = "Store failure or malformed id", body = ErrorBody),
    )
)]
pub(crate) async fn get_automobile(
    State(state): State<AppState>,
    id: IdParam,
) -> Result<Json<Option<Automobile>>, ApiError> {
    let id = automobile_id(id)?;
    let automobile = state.run(move |service| service.get_by_id(id)).await?;
    Ok(Json(automobile))
}

/// Add a new automobile.
#[utoipa::path(
    post,
    path = "/api/automobiles",
    tag = "automobiles",
    request_body = AutomobileInput,
    responses(
        (status = 201, description = "Automobile created", body = Automobile),
        (status = 500, description = "Store failure or malformed body", body = ErrorBody),
    )
)]
pub(crate) async fn create_automobile(
    State(state): State<AppState>,
    body: InputBody,
) -> Result<(StatusCode, Json<Automobile>), ApiError> {
    let input = automobile_input(body)?;
    let created = state.run(move |service| service.create(&input)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing automobile. Omitted attributes are stored as null.
#[utoipa::path(
    put,
    path = "/api/automobiles/{id}",
    tag = "automobiles",
    params(("id" = i64, Path, description = "Automobile id")),
    request_body = AutomobileInput,
    responses(
        (status = 200, description = "The updated automobile, or null when the id is unknown", body = Automobile),
        (status = 500, description = "Store failure or malformed input", body = ErrorBody),
    )
)]
pub(crate) async fn update_automobile(
    State(state): State<AppState>,
    id: IdParam,
    body: InputBody,
) -> Result<Json<Option<Automobile>>, ApiError> {
    let id = automobile_id(id)?;
    let input = automobile_input(body)?;
    let updated = state
        .run(move |service| service.update(id, &input))
        .await?;
    Ok(Json(updated))
}

/// Delete an automobile.
#[utoipa::path(
    delete,
    path = "/api/automobiles/{id}",
    tag = "automobiles",
    params(("id" = i64, Path, description = "Automobile id")),
    responses(
        (status = 200, description = "Automobile deleted, whether or not it existed", body = DeleteConfirmation),
        (status = 500, description = "Store failure or malformed id", body = ErrorBody),
    )
)]
pub(crate) async fn delete_automobile(
    State(state): State<AppState>,
    id: IdParam,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    let id = automobile_id(id)?;
    let confirmation = state.run(move |service| service.delete_by_id(id)).await?;
    Ok(Json(confirmation))
}

fn automobile_id(id: IdParam) -> Result<AutomobileId, ApiError> {
    id.map(|Path(id)| AutomobileId(id))
        .map_err(|rejection| ApiError::request(rejection.body_text()))
}

fn automobile_input(body: InputBody) -> Result<AutomobileInput, ApiError> {
    body.map(|Json(input)| input)
        .map_err(|rejection| ApiError::request(rejection.body_text()))
}
