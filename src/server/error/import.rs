use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{error::error_response, model::import::ImportKind};

/// Errors raised by the import pipeline and its job registry.
#[derive(Error, Debug)]
pub enum ImportError {
    /// A job for this importer is still running. Results in 409 Conflict.
    #[error("Import '{0}' is already running")]
    AlreadyRunning(ImportKind),

    /// The provider answered with a non-empty `errors` field.
    #[error("Upstream error from {endpoint}: {message}")]
    Upstream { endpoint: String, message: String },

    /// The provider answered with a non-success HTTP status.
    #[error("Upstream request to {endpoint} failed with status {status}")]
    UpstreamStatus { endpoint: String, status: u16 },

    /// `API_FOOTBALL_KEY` is not configured.
    #[error("API_FOOTBALL_KEY is not configured")]
    MissingApiKey,

    /// No league/season was given and none is configured.
    #[error("Import '{0}' needs a league and season; pass them or set IMPORT_LEAGUES/IMPORT_SEASON")]
    MissingScope(ImportKind),

    /// The importer has no file area under `FILES_DIR`.
    #[error("Import '{0}' has no file source")]
    FileSourceUnsupported(ImportKind),

    /// Reading an export file failed.
    #[error("Failed to read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An export file is neither a provider envelope nor a JSON array.
    #[error("Failed to parse {}: {source}", path.display())]
    FileFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record does not match the importer's expected shape.
    #[error("Malformed {kind} record: {source}")]
    Decode {
        kind: ImportKind,
        #[source]
        source: serde_json::Error,
    },

    /// A record references a row that does not exist locally.
    #[error("Missing {resource} with key {key}")]
    MissingReference { resource: &'static str, key: String },
}

/// Converts import errors into HTTP responses.
///
/// - `AlreadyRunning` → 409 Conflict
/// - `Upstream` / `UpstreamStatus` → 502 Bad Gateway
/// - `MissingApiKey` → 503 Service Unavailable
/// - `MissingScope` / `FileSourceUnsupported` → 400 Bad Request
/// - Everything else → 500 with a generic message
impl IntoResponse for ImportError {
    fn into_response(self) -> Response {
        match self {
            err @ Self::AlreadyRunning(_) => error_response(StatusCode::CONFLICT, err.to_string()),
            err @ (Self::Upstream { .. } | Self::UpstreamStatus { .. }) => {
                tracing::warn!("{}", err);
                error_response(
                    StatusCode::BAD_GATEWAY,
                    "Upstream data provider returned an error".to_string(),
                )
            }
            err @ Self::MissingApiKey => {
                error_response(StatusCode::SERVICE_UNAVAILABLE, err.to_string())
            }
            err @ (Self::MissingScope(_) | Self::FileSourceUnsupported(_)) => {
                error_response(StatusCode::BAD_REQUEST, err.to_string())
            }
            err => {
                tracing::error!("{}", err);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}
