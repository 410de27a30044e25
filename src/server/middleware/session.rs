//! Type-safe session wrappers.
//!
//! The API authenticates with bearer tokens, so the server-side session only carries
//! the short-lived state of the Google OAuth flow. Wrapping it keeps the session key
//! and value type in one place.

use tower_sessions::Session;

use crate::server::error::{auth::AuthError, AppError};

const SESSION_OAUTH_CSRF_TOKEN: &str = "oauth:csrf_token";

/// CSRF protection session management.
///
/// Handles CSRF token storage and validation for OAuth flows. Tokens are stored
/// during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_OAUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// The token is removed so each one can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_OAUTH_CSRF_TOKEN).await?;
        Ok(token)
    }

    /// Consumes the stored token and checks it against the callback `state`.
    ///
    /// # Returns
    /// - `Ok(())` - The state matches the stored token
    /// - `Err(AuthError::CsrfValidationFailed)` - No token stored or mismatch
    pub async fn validate(&self, state: &str) -> Result<(), AppError> {
        match self.take_token().await? {
            Some(token) if token == state => Ok(()),
            _ => Err(AuthError::CsrfValidationFailed.into()),
        }
    }
}
