use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::token::TokenService,
};

pub enum Permission {
    Admin,
}

/// Resolves the caller of a request from its `Authorization: Bearer` header.
///
/// The token only identifies the user; the account is reloaded on every request so a
/// deleted user or a changed role takes effect immediately.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Requires an authenticated caller holding every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(User)` - The caller
    /// - `Err(AuthError::MissingToken)` - No bearer token in the request
    /// - `Err(AuthError::InvalidToken)` - Bad signature, structure or expiry
    /// - `Err(AuthError::UserNotFound)` - The token's subject no longer exists
    /// - `Err(AuthError::AccessDenied)` - The caller lacks a permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify(token)?;
        let user_id = claims
            .sub
            .parse::<i32>()
            .map_err(|_| AuthError::UserNotFound(claims.sub.clone()))?;

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotFound(claims.sub).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an admin operation without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Extracts the token of an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
