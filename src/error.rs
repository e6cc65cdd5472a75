//! Error types for the company service
//!
//! A single error enum shared by the store and the HTTP layer. The store
//! returns it directly and the handlers convert it into a JSON error response.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Result type alias using ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("company name already exists: {0}")]
    DuplicateName(String),

    #[error("company not found: {0}")]
    CompanyNotFound(String),

    #[error("employee not found: {0}")]
    EmployeeNotFound(String),

    // -------------------------------------------------------------------------
    // Request Errors
    // -------------------------------------------------------------------------
    #[error("validation failed: {0}")]
    Validation(String),
}

impl ApiError {
    /// Stable machine-readable code carried in the error body.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateName(_) => "duplicate_name",
            Self::CompanyNotFound(_) => "company_not_found",
            Self::EmployeeNotFound(_) => "employee_not_found",
            Self::Validation(_) => "validation_failed",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::DuplicateName(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::CompanyNotFound(_) | Self::EmployeeNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorEnvelope {
            error: ErrorBody {
                code: self.code(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
