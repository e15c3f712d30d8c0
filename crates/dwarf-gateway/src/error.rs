use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dwarf_core::StoreError;
use thiserror::Error;
use tracing::error;

use crate::model::ErrorResponse;
use crate::validate::InvalidUrl;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no urls given")]
    EmptyRequest,
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] InvalidUrl),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyRequest | AppError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            AppError::Store(err) if err.is_backend_failure() => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
