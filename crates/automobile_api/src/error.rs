//! Adapter error type and its HTTP mapping.
//!
//! Every failure becomes `500 {"error": <message>}`; there is no 4xx
//! distinction, and not-found is never an error.

use automobile_core::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Store(#[from] StoreError),
    /// Request could not be turned into service arguments.
    #[error("{0}")]
    Request(String),
    #[error("store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request(message.into())
    }
}

/// Body of every 500 response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        error!("event=http_request module=api status=error error={message}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody { error: message }),
        )
            .into_response()
    }
}
