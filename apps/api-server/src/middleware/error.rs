//! Error handling middleware - maps failures onto the JSON error
//! envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use gazette_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to envelope responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Validation(String),
    #[allow(dead_code)]
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(msg) => ErrorResponse::not_found(msg.clone()),
            AppError::BadRequest(msg) => ErrorResponse::bad_request(msg.clone()),
            AppError::Validation(msg) => ErrorResponse::validation(msg.clone()),
            AppError::Internal(msg) => {
                // Log internal errors; the body stays generic.
                tracing::error!("Internal error: {}", msg);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<gazette_core::DomainError> for AppError {
    fn from(err: gazette_core::DomainError) -> Self {
        match err {
            gazette_core::DomainError::NotFound { entity, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity, id))
            }
            gazette_core::DomainError::Validation(msg) => AppError::Validation(msg),
            gazette_core::DomainError::Duplicate(msg) => AppError::BadRequest(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
