//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type. It wraps the domain-specific errors and
//! implements `IntoResponse`, so handlers can return `Result<_, AppError>` and rely on
//! `?` for conversion. Every error body is an `ErrorDto` (`{"error": "..."}`).

pub mod auth;
pub mod config;
pub mod import;
pub mod internal;

use axum::{
    extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, import::ImportError, internal::InternalError,
    },
};

/// Top-level application error type.
///
/// Domain errors (`AuthError`, `ImportError`) handle their own status mapping. The
/// generic variants map to 400/404/409, and everything else becomes a logged 500 with a
/// generic body.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 400/401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Import pipeline error, including the already-running guard (409).
    #[error(transparent)]
    ImportErr(#[from] ImportError),

    /// Unexpected internal state; always a 500.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Request body failed `validator` checks. Results in 400 Bad Request.
    #[error(transparent)]
    ValidationErr(#[from] validator::ValidationErrors),

    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Results in 409 Conflict with the provided message.
    #[error("{0}")]
    Conflict(String),

    /// Request path, query or body could not be extracted.
    ///
    /// # Fields
    /// - Status chosen by the axum rejection (400, 415 or 422)
    /// - Rejection message
    #[error("{1}")]
    Rejected(StatusCode, String),

    /// Internal server error with custom message.
    ///
    /// The message is logged; the client receives a generic message.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `ValidationErr`
/// - Rejection status - For `Rejected`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - Variable - For `AuthErr` and `ImportErr`, delegated to their own mapping
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ImportErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            Self::Rejected(status, msg) => error_response(status, msg),
            Self::ValidationErr(errors) => {
                error_response(StatusCode::BAD_REQUEST, errors.to_string())
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

macro_rules! rejection_into_app_error {
    ($($rejection:ty),*) => {
        $(
            impl From<$rejection> for AppError {
                fn from(rejection: $rejection) -> Self {
                    Self::Rejected(rejection.status(), rejection.body_text())
                }
            }
        )*
    };
}

rejection_into_app_error!(JsonRejection, FormRejection, PathRejection, QueryRejection);

/// Builds a JSON error response with the given status and message.
pub fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
