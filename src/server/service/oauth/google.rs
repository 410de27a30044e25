//! Google authorization-code flow.
//!
//! The login URL carries a random CSRF state that the controller keeps in the session.
//! The callback exchanges the code, reads the OpenID userinfo and resolves the local
//! account: by Google subject first, then by verified email (linking the subject), and
//! otherwise a new `user` account is created.

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::{
    model::user::Role,
    server::{
        config::GOOGLE_USERINFO_URL,
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParam, UpdateUserParam, User},
        state::OAuth2Client,
    },
};

/// OpenID Connect userinfo as returned by Google.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    pub sub: String,
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    pub name: Option<String>,
}

pub struct GoogleAuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
}

impl<'a> GoogleAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Generates the Google consent URL with a fresh CSRF state.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and the state to store in the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url()
    }

    /// Exchanges the authorization code and resolves the local account.
    ///
    /// # Returns
    /// - `Ok(User)` - Existing, linked or newly created account
    /// - `Err(AppError::AuthErr(OAuthTokenExchange))` - Google rejected the code
    /// - `Err(AppError::AuthErr(EmailNotVerified))` - No account for the subject and the
    ///   Google email is not verified
    /// - `Err(AppError::ReqwestErr)` - Userinfo request failed
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::OAuthTokenExchange(e.to_string()))?;

        let info = self
            .http_client
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<GoogleUserInfo>()
            .await?;

        Self::resolve_user(self.db, info).await
    }

    /// Maps Google userinfo to a local account, linking or creating it as needed.
    pub async fn resolve_user(db: &DatabaseConnection, info: GoogleUserInfo) -> Result<User, AppError> {
        let repo = UserRepository::new(db);

        if let Some(user) = repo.find_by_google_sub(&info.sub).await? {
            return Ok(user);
        }

        let Some(email) = info.email.filter(|_| info.email_verified) else {
            return Err(AuthError::EmailNotVerified.into());
        };

        if let Some(user) = repo.find_by_email(&email).await? {
            tracing::info!("Linking Google account to user {}", user.id);

            return repo
                .update(
                    user.id,
                    UpdateUserParam {
                        google_sub: Some(info.sub),
                        ..Default::default()
                    },
                )
                .await?
                .ok_or_else(|| AppError::NotFound("User not found".to_string()));
        }

        let user = repo
            .create(CreateUserParam {
                email: email.trim().to_lowercase(),
                name: info.name,
                password_hash: None,
                role: Role::User,
                google_sub: Some(info.sub),
            })
            .await?;

        tracing::info!("Created user {} from Google login", user.id);

        Ok(user)
    }
}
