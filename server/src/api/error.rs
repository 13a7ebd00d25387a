//! API Error Mapping
//!
//! Converts domain errors into HTTP responses with a JSON message body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::DomainError;

/// JSON error body: `{"message": ...}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// HTTP-facing error produced by request handlers
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match error {
            // fixed wire message, whatever detail the domain carries
            DomainError::NotFound(_) => Self {
                status: StatusCode::NOT_FOUND,
                message: "Todo not found".to_string(),
            },
            DomainError::InvalidInput(message) => Self {
                status: StatusCode::BAD_REQUEST,
                message,
            },
            DomainError::Persistence(message) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                message: self.message,
            }),
        )
            .into_response()
    }
}
