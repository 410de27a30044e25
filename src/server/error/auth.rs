use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Authentication and authorization failures.
///
/// Client-facing messages are generic: none of them reveal whether an account with
/// a given email exists.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a protected endpoint.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token signature, structure or expiry check failed.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// Token is valid but its subject no longer exists.
    #[error("Token subject {0} not found")]
    UserNotFound(String),

    /// Unknown email or wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Authenticated user lacks the required role.
    ///
    /// # Fields
    /// - User id
    /// - Description of the denied operation for logging
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Legacy authentication endpoint called with anything other than `local`.
    #[error("Unsupported authentication strategy '{0}'")]
    UnsupportedStrategy(String),

    /// Reset token unknown, expired or already redeemed.
    #[error("Password reset token is expired or already used")]
    ResetTokenInvalid,

    /// Google login requested but no client credentials are configured.
    #[error("Google OAuth is not configured")]
    OAuthDisabled,

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The state in the callback URL does not match the one stored in the session.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Authorization code exchange with Google failed.
    #[error("OAuth token exchange failed: {0}")]
    OAuthTokenExchange(String),

    /// Google returned an account whose email is not verified.
    #[error("Google account email is not verified")]
    EmailNotVerified,

    /// Signing a token failed.
    #[error("Failed to issue token: {0}")]
    TokenCreation(#[source] jsonwebtoken::errors::Error),

    /// bcrypt hashing or verification failed unexpectedly.
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UserNotFound` → 401 with a generic message
/// - `InvalidCredentials` → 401 "Incorrect email or password"
/// - `AccessDenied` → 403
/// - `UnsupportedStrategy`, `ResetTokenInvalid`, CSRF and OAuth failures → 400
/// - `OAuthDisabled` → 404
/// - `TokenCreation` / `PasswordHash` → 500
///
/// Details are logged at debug level; signing and hashing failures at error level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken => error_response(
                StatusCode::UNAUTHORIZED,
                "Not authenticated".to_string(),
            ),
            Self::InvalidToken(_) | Self::UserNotFound(_) => error_response(
                StatusCode::UNAUTHORIZED,
                "Could not validate credentials".to_string(),
            ),
            Self::InvalidCredentials => error_response(
                StatusCode::UNAUTHORIZED,
                "Incorrect email or password".to_string(),
            ),
            Self::AccessDenied(_, _) => error_response(
                StatusCode::FORBIDDEN,
                "The user doesn't have enough privileges".to_string(),
            ),
            Self::UnsupportedStrategy(strategy) => error_response(
                StatusCode::BAD_REQUEST,
                format!("Unsupported authentication strategy '{}'", strategy),
            ),
            Self::ResetTokenInvalid => error_response(
                StatusCode::BAD_REQUEST,
                "Invalid token: expired or already used".to_string(),
            ),
            Self::OAuthDisabled => error_response(
                StatusCode::NOT_FOUND,
                "Google login is not available".to_string(),
            ),
            Self::CsrfValidationFailed
            | Self::OAuthTokenExchange(_)
            | Self::EmailNotVerified => error_response(
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.".to_string(),
            ),
            err @ (Self::TokenCreation(_) | Self::PasswordHash(_)) => {
                tracing::error!("{}", err);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}
