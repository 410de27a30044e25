//! User factory for creating test user entities.
//!
//! Passwords are hashed with bcrypt at the minimum cost so tests stay fast while
//! still exercising real hash verification.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password assigned to factory users unless overridden.
pub const DEFAULT_PASSWORD: &str = "correct horse battery staple";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let admin = UserFactory::new(&db)
///     .email("admin@example.com")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    name: Option<String>,
    password: Option<String>,
    admin: bool,
    google_sub: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - name: `"User {id}"`
    /// - password: `DEFAULT_PASSWORD`
    /// - admin: `false`
    /// - google_sub: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            name: Some(format!("User {}", id)),
            password: Some(DEFAULT_PASSWORD.to_string()),
            admin: false,
            google_sub: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the plain-text password. `None` creates an account without local login.
    pub fn password(mut self, password: Option<&str>) -> Self {
        self.password = password.map(str::to_string);
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn google_sub(mut self, sub: impl Into<String>) -> Self {
        self.google_sub = Some(sub.into());
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert, or hashing failure
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let password_hash = match self.password {
            Some(password) => Some(
                bcrypt::hash(password, 4).map_err(|e| DbErr::Custom(e.to_string()))?,
            ),
            None => None,
        };
        let now = Utc::now();

        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(if self.admin { "admin" } else { "user" }.to_string()),
            google_sub: ActiveValue::Set(self.google_sub),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a regular user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an admin user with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).admin(true).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(user.email.ends_with("@example.com"));
        assert_eq!(user.role, "user");
        let hash = user.password_hash.unwrap();
        assert!(bcrypt::verify(DEFAULT_PASSWORD, &hash).unwrap());

        Ok(())
    }

    #[tokio::test]
    async fn creates_admin_without_password() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = UserFactory::new(db)
            .admin(true)
            .password(None)
            .build()
            .await?;

        assert_eq!(user.role, "admin");
        assert!(user.password_hash.is_none());

        Ok(())
    }
}
