//! Password recovery by emailed one-time token.
//!
//! The plain token only ever exists in the email; the database keeps its SHA-256
//! digest. Redemption consumes the token and changes the password in one transaction.

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    config::Config,
    data::{password_reset::PasswordResetRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::UpdateUserParam,
    service::{auth::password::hash_password, mail::Mailer},
    util::token::{generate_token, sha256_hex, RESET_TOKEN_LENGTH},
};

pub struct PasswordResetService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a Mailer,
    config: &'a Config,
}

impl<'a> PasswordResetService<'a> {
    pub fn new(db: &'a DatabaseConnection, mailer: &'a Mailer, config: &'a Config) -> Self {
        Self { db, mailer, config }
    }

    /// Emails a reset link to `email` if an account exists.
    ///
    /// Returns `Ok(())` for unknown emails too, so callers cannot tell which accounts exist.
    /// Delivery failures are logged, not returned, for the same reason.
    ///
    /// # Returns
    /// - `Ok(())` - Link sent or delivery failed, or no such account
    /// - `Err(AppError)` - Token storage failed
    pub async fn request(&self, email: &str) -> Result<(), AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            tracing::debug!("Password recovery requested for unknown email");
            return Ok(());
        };

        let token = self.issue_token(user.id).await?;
        let link = format!(
            "{}/reset-password?token={}",
            self.config.app_url.trim_end_matches('/'),
            token
        );
        let body = format!(
            "A password reset was requested for your account.\n\n\
             Use the link below within {} minutes to choose a new password:\n\n{}\n\n\
             If you did not request this, you can ignore this email.",
            self.config.reset_token_ttl_minutes, link
        );

        if let Err(err) = self
            .mailer
            .send(&user.email, "Password recovery", body)
            .await
        {
            tracing::error!("Failed to deliver password recovery email: {}", err);
        }

        Ok(())
    }

    /// Creates a token for `user_id` and stores its digest.
    ///
    /// # Returns
    /// - `Ok(String)` - The plain token, to be delivered to the user
    /// - `Err(AppError::DbErr)` - Insert failed
    pub async fn issue_token(&self, user_id: i32) -> Result<String, AppError> {
        let token = generate_token(RESET_TOKEN_LENGTH);
        let expires_at = Utc::now() + Duration::minutes(self.config.reset_token_ttl_minutes);

        PasswordResetRepository::new(self.db)
            .create(user_id, sha256_hex(&token), expires_at)
            .await?;

        Ok(token)
    }

    /// Redeems `token` and sets `new_password`.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed; the token can no longer be used
    /// - `Err(AppError::AuthErr(ResetTokenInvalid))` - Unknown, expired or already used
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn reset(&self, token: &str, new_password: String) -> Result<(), AppError> {
        let now = Utc::now();
        let digest = sha256_hex(token);

        let Some(reset) = PasswordResetRepository::new(self.db)
            .find_valid(&digest, now)
            .await?
        else {
            return Err(AuthError::ResetTokenInvalid.into());
        };

        let password_hash = hash_password(new_password, self.config.bcrypt_cost).await?;

        let txn = self.db.begin().await?;

        if !PasswordResetRepository::new(&txn)
            .mark_used(reset.id, now)
            .await?
        {
            txn.rollback().await?;
            return Err(AuthError::ResetTokenInvalid.into());
        }

        let updated = UserRepository::new(&txn)
            .update(
                reset.user_id,
                UpdateUserParam {
                    password_hash: Some(password_hash),
                    ..Default::default()
                },
            )
            .await?;

        if updated.is_none() {
            txn.rollback().await?;
            return Err(AuthError::ResetTokenInvalid.into());
        }

        txn.commit().await?;

        tracing::info!("Password reset for user {}", reset.user_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{config::Config, service::auth::password::verify_password};
    use test_utils::{builder::TestBuilder, factory};

    fn config() -> Config {
        Config::from_lookup(|name| match name {
            "DATABASE_URL" => Some("sqlite::memory:".to_string()),
            "JWT_SECRET" => Some("secret".to_string()),
            "BCRYPT_COST" => Some("4".to_string()),
            _ => None,
        })
        .unwrap()
    }

    fn mailer() -> Mailer {
        Mailer::log_only("test@example.com".parse().unwrap())
    }

    /// Tests that a token resets the password exactly once.
    ///
    /// Expected: first reset Ok with the new password in effect, second reset
    /// Err(ResetTokenInvalid)
    #[tokio::test]
    async fn redeems_token_once() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let (config, mailer) = (config(), mailer());
        let service = PasswordResetService::new(db, &mailer, &config);

        let token = service.issue_token(user.id).await?;

        service.reset(&token, "brand new password".to_string()).await?;
        let second = service.reset(&token, "another password".to_string()).await;

        assert!(matches!(
            second,
            Err(AppError::AuthErr(AuthError::ResetTokenInvalid))
        ));
        let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
        let hash = stored.password_hash.unwrap();
        assert!(verify_password("brand new password".to_string(), hash).await?);

        Ok(())
    }

    /// Tests that only the digest of the token is stored.
    ///
    /// Expected: stored token_hash equals sha256(token) and differs from the token
    #[tokio::test]
    async fn stores_digest_only() -> Result<(), AppError> {
        use sea_orm::EntityTrait;

        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let (config, mailer) = (config(), mailer());

        let token = PasswordResetService::new(db, &mailer, &config)
            .issue_token(user.id)
            .await?;

        let rows = entity::prelude::PasswordReset::find().all(db).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].token_hash, sha256_hex(&token));
        assert_ne!(rows[0].token_hash, token);

        Ok(())
    }

    /// Tests that requesting recovery for an unknown email succeeds silently.
    ///
    /// Expected: Ok(()) and no token stored
    #[tokio::test]
    async fn ignores_unknown_email() -> Result<(), AppError> {
        use sea_orm::{EntityTrait, PaginatorTrait};

        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (config, mailer) = (config(), mailer());

        PasswordResetService::new(db, &mailer, &config)
            .request("nobody@example.com")
            .await?;

        assert_eq!(entity::prelude::PasswordReset::find().count(db).await?, 0);

        Ok(())
    }

    /// Tests that an unreachable mail relay answers the same for known and unknown
    /// emails.
    ///
    /// Expected: Ok(()) for both, the token of the known account still stored
    #[tokio::test]
    async fn delivery_failure_matches_unknown_email() -> Result<(), AppError> {
        use sea_orm::{EntityTrait, PaginatorTrait};

        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let config = Config::from_lookup(|name| match name {
            "DATABASE_URL" => Some("sqlite::memory:".to_string()),
            "JWT_SECRET" => Some("secret".to_string()),
            "SMTP_HOST" => Some("127.0.0.1".to_string()),
            "SMTP_PORT" => Some("1".to_string()),
            _ => None,
        })?;
        let mailer = Mailer::from_config(&config)?;
        let service = PasswordResetService::new(db, &mailer, &config);

        let known = service.request(&user.email).await;
        let unknown = service.request("nobody@example.com").await;

        assert!(known.is_ok());
        assert!(unknown.is_ok());
        assert_eq!(entity::prelude::PasswordReset::find().count(db).await?, 1);

        Ok(())
    }

    /// Tests that an unknown token is rejected.
    ///
    /// Expected: Err(ResetTokenInvalid)
    #[tokio::test]
    async fn rejects_unknown_token() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (config, mailer) = (config(), mailer());

        let result = PasswordResetService::new(db, &mailer, &config)
            .reset("nope", "brand new password".to_string())
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::ResetTokenInvalid))
        ));

        Ok(())
    }
}
