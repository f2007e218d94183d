//! Error types for the Ascent booking server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Stable numeric codes returned alongside every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    MissingSelection = 2,
    BadValue = 3,
    TermsNotAccepted = 4,
    NoSuchData = 5,
    InvalidTransition = 6,
    NotBookable = 7,
    CollaboratorUnavailable = 8,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// A slot or duration has not been chosen yet
    #[error("{0}")]
    MissingSelection(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Please accept the Terms & Conditions to proceed with payment.")]
    TermsNotAccepted,

    #[error("Not found: {0}")]
    NotFound(String),

    /// The booking session cannot take this event in its current stage
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Payment widget or camera not available
    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    fn parts(&self) -> (StatusCode, ErrorCode, String) {
        match self {
            AppError::MissingSelection(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::MissingSelection, msg.clone())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            AppError::TermsNotAccepted => (
                StatusCode::BAD_REQUEST,
                ErrorCode::TermsNotAccepted,
                self.to_string(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchData, msg.clone()),
            AppError::InvalidTransition(msg) => {
                (StatusCode::CONFLICT, ErrorCode::InvalidTransition, msg.clone())
            }
            AppError::BusinessRule(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::NotBookable, msg.clone())
            }
            AppError::Unavailable(msg) => {
                tracing::warn!("Collaborator unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorCode::CollaboratorUnavailable,
                    msg.clone(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_selection_maps_to_bad_request() {
        let (status, code, message) =
            AppError::MissingSelection("Please select a slot first.".into()).parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, ErrorCode::MissingSelection);
        assert_eq!(message, "Please select a slot first.");
    }

    #[test]
    fn unavailable_maps_to_service_unavailable() {
        let (status, code, _) = AppError::Unavailable("camera".into()).parts();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(code as u32, 8);
    }

    #[test]
    fn internal_error_hides_details() {
        let (status, _, message) = AppError::Internal("boom".into()).parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Internal server error");
    }
}
