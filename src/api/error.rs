//! HTTP error mapping.
//!
//! Wraps the crate [`Error`] enum so axum handlers can return `Result<_,
//! ApiError>` with `?`. Validation failures map to `400`, unknown resources
//! to `404`, an empty eligible-session result to `409`, and everything
//! internal to `500`. Bodies are `{code, message}` JSON.

use crate::errors::Error;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// JSON body returned for every error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Stable machine-readable error code
    pub code: String,
    /// Human-readable description
    pub message: String,
}

/// An error on its way out of an HTTP handler
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    /// A `404` for a resource outside the domain error taxonomy
    /// (e.g. an unknown receipt id).
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorBody {
                code: "not_found".to_string(),
                message: message.into(),
            },
        }
    }

    /// Status this error responds with
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let (status, code) = match &err {
            Error::InvalidPercentage { .. }
            | Error::InvalidDateRange { .. }
            | Error::EmptySessionList
            | Error::InvalidEnumValue { .. } => (StatusCode::BAD_REQUEST, "invalid_input"),
            Error::MentorNotFound { .. } => (StatusCode::NOT_FOUND, "mentor_not_found"),
            Error::NoEligibleSessions { .. } => (StatusCode::CONFLICT, "no_eligible_sessions"),
            Error::Config { .. } | Error::Database(_) | Error::Io(_) | Error::InvalidSession { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %err, "internal error in request handler");
        }

        Self {
            status,
            body: ErrorBody {
                code: code.to_string(),
                message: err.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
