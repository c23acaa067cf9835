//! Error types for the Holonet server application.
//!
//! [`Error`] aggregates the typed API error, configuration errors and database errors
//! into a single type returned by every handler. Its `IntoResponse` implementation is the
//! one place where errors are rendered into the JSON envelope sent to API consumers.

pub mod api;
pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{api::ApiError, config::ConfigError},
};

/// Main error type for the Holonet server application.
///
/// Uses `thiserror`'s `#[from]` attribute so that repository, service and controller code
/// can propagate any underlying failure with the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Application error with a message and status code meant for the API consumer.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Malformed JSON bodies and bodies missing required fields are rejected as bad requests.
impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::ApiError(ApiError::BadRequest(rejection.body_text()))
    }
}

/// Path segments that do not parse, such as a non-numeric ID or an unknown favorite kind,
/// do not match any resource.
impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::ApiError(ApiError::NotFound(rejection.body_text()))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Duplicate records and malformed request bodies
/// - 404 Not Found - Missing users, records or favorites, and unparseable path segments
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ApiError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        let status = StatusCode::INTERNAL_SERVER_ERROR;

        (
            status,
            Json(ErrorDto {
                message: "Internal server error".to_string(),
                status_code: status.as_u16(),
            }),
        )
            .into_response()
    }
}
