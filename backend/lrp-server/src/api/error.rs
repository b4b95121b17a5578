//! REST API error types
//!
//! Every failure is answered with `{ ok: false, error, ... }` and the status
//! code of its variant.

use lrp_core::CoreError;
use lrp_store::StoreError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// Caller-facing message for a missing required field, whichever it was.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: reqId, pendingAction, actionBy";

/// Caller-facing message for a failed store call.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Always false
    pub ok: bool,
    pub error: String,
    /// Names of the required fields that were absent or empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<&'static str>>,
    /// Underlying store failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required submission field absent or empty (400)
    #[error("Missing required fields: {} {location}", missing.join(", "))]
    MissingField {
        missing: Vec<&'static str>,
        location: ErrorLocation,
    },

    /// Body is not a JSON object of the expected shape (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Document store call failed (500)
    #[error("Store failure: {source} {location}")]
    Store {
        source: StoreError,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::MissingField { missing, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    ok: false,
                    error: MISSING_FIELDS_MESSAGE.into(),
                    missing: Some(missing),
                    details: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    ok: false,
                    error: message,
                    missing: None,
                    details: None,
                },
            ),
            ApiError::Store { source, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    ok: false,
                    error: SERVER_ERROR_MESSAGE.into(),
                    missing: None,
                    details: Some(source.details()),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Convert validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let CoreError::MissingField { missing, .. } = e;
        ApiError::MissingField {
            missing,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert store errors to API errors
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        ApiError::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert body extraction failures to API errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
