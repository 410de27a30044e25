//! User data repository for database operations.
//!
//! Provides the `UserRepository` for account creation, lookup by email or Google
//! subject, partial updates and deletion. Entities are converted to the `User` domain
//! model at this boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::user::Role,
    server::{
        error::AppError,
        model::user::{CreateUserParam, UpdateUserParam, User},
    },
};

/// Repository providing database operations for user management.
///
/// Generic over the connection so password changes can run inside the transaction
/// that consumes a reset token.
pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - Account fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DbErr)` - Insert failed, e.g. the email is already taken
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            google_sub: ActiveValue::Set(param.google_sub),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by email, compared case-insensitively.
    ///
    /// Emails are stored lowercased by `UserService`, so the lookup lowercases its input.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.trim().to_lowercase()))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    pub async fn find_by_google_sub(&self, sub: &str) -> Result<Option<User>, AppError> {
        entity::prelude::User::find()
            .filter(entity::user::Column::GoogleSub.eq(sub))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Lists users ordered by id with optional pagination.
    pub async fn get_all(&self, limit: Option<u64>, skip: Option<u64>) -> Result<Vec<User>, AppError> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .limit(limit)
            .offset(skip)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Checks whether a user with the given email exists.
    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.trim().to_lowercase()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if any admin users exist in the database.
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies a partial update to a user.
    ///
    /// Only the fields set in `param` are written; `updated_at` is always refreshed.
    ///
    /// # Arguments
    /// - `id` - User id
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError::DbErr)` - Update failed, e.g. the new email is taken
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<Option<User>, AppError> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(Some(name));
        }
        if let Some(password_hash) = param.password_hash {
            active.password_hash = ActiveValue::Set(Some(password_hash));
        }
        if let Some(role) = param.role {
            active.role = ActiveValue::Set(role.as_str().to_string());
        }
        if let Some(google_sub) = param.google_sub {
            active.google_sub = ActiveValue::Set(Some(google_sub));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        User::from_entity(entity).map(Some)
    }

    /// Deletes a user; password reset tokens cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
