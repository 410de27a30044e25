//! Local authentication: credential checks and bearer token issuance.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::{password::verify_password, token::TokenService},
};

/// Service for the local email/password strategy.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Checks an email/password pair.
    ///
    /// Unknown emails, accounts without a local password and wrong passwords all produce
    /// the same error so the response does not reveal which accounts exist.
    ///
    /// # Arguments
    /// - `email` - Account email, compared case-insensitively
    /// - `password` - Plain-text password
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Any mismatch
    /// - `Err(AppError::AuthErr(PasswordHash))` - The stored hash is malformed
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(hash) = user.password_hash.clone() else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password.to_string(), hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Authenticates and issues a bearer token.
    ///
    /// # Returns
    /// - `Ok((token, User))` - Signed access token and the authenticated user
    /// - `Err(AppError)` - See `authenticate`
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), AppError> {
        let user = self.authenticate(email, password).await?;
        let token = self.tokens.issue(&user)?;

        tracing::debug!("User {} logged in", user.id);

        Ok((token, user))
    }
}
