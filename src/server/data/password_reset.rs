//! Password reset token repository.
//!
//! Tokens are looked up by the SHA-256 hex digest of the plain token. A token is valid
//! while unused and unexpired; `mark_used` is a conditional update so only one
//! redemption can succeed.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ExprTrait, QueryFilter,
    sea_query::Expr,
};

pub struct PasswordResetRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PasswordResetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a new token digest for `user_id`.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the token
    /// - `token_hash` - SHA-256 hex digest of the plain token
    /// - `expires_at` - Instant after which the token is rejected
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored token row
    /// - `Err(DbErr)` - Insert failed
    pub async fn create(
        &self,
        user_id: i32,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::password_reset::Model, DbErr> {
        entity::password_reset::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token_hash: ActiveValue::Set(token_hash),
            expires_at: ActiveValue::Set(expires_at),
            used_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds an unused, unexpired token by digest.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Token exists and can still be redeemed at `now`
    /// - `Ok(None)` - Unknown, used or expired token
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_valid(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::password_reset::Model>, DbErr> {
        entity::prelude::PasswordReset::find()
            .filter(entity::password_reset::Column::TokenHash.eq(token_hash))
            .filter(entity::password_reset::Column::UsedAt.is_null())
            .filter(entity::password_reset::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await
    }

    /// Marks a token as used if it is still unused and unexpired.
    ///
    /// # Returns
    /// - `Ok(true)` - This call consumed the token
    /// - `Ok(false)` - The token was already used or has expired
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_used(&self, id: i32, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::PasswordReset::update_many()
            .col_expr(entity::password_reset::Column::UsedAt, Expr::value(now))
            .filter(entity::password_reset::Column::Id.eq(id))
            .filter(entity::password_reset::Column::UsedAt.is_null())
            .filter(entity::password_reset::Column::ExpiresAt.gt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes every token that expired before `now` or has been used.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows
    pub async fn delete_stale(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::PasswordReset::delete_many()
            .filter(
                entity::password_reset::Column::ExpiresAt
                    .lte(now)
                    .or(entity::password_reset::Column::UsedAt.is_not_null()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
