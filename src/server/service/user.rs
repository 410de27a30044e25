//! Account management.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{CreateUserDto, Role, UpdateUserDto},
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{CreateUserParam, UpdateUserParam, User},
        service::auth::password::hash_password,
    },
};

/// Service for creating, reading, updating and deleting accounts.
///
/// Emails are stored lowercased; passwords are hashed with the configured bcrypt cost
/// before they reach the repository.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    bcrypt_cost: u32,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }

    pub async fn get_all(&self, limit: Option<u64>, skip: Option<u64>) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db).get_all(limit, skip).await
    }

    /// Gets a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Creates a local account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user, role `user` unless specified
    /// - `Err(AppError::Conflict)` - The email is already registered
    pub async fn create(&self, dto: CreateUserDto) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);
        let email = dto.email.trim().to_lowercase();

        if repo.email_exists(&email).await? {
            return Err(AppError::Conflict(
                "The user with this email already exists in the system".to_string(),
            ));
        }

        let password_hash = hash_password(dto.password, self.bcrypt_cost).await?;

        let user = repo
            .create(CreateUserParam {
                email,
                name: dto.name,
                password_hash: Some(password_hash),
                role: dto.role.unwrap_or(Role::User),
                google_sub: None,
            })
            .await?;

        tracing::info!("Created user {} with role {}", user.id, user.role.as_str());

        Ok(user)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Conflict)` - The new email belongs to another account
    pub async fn update(&self, id: i32, dto: UpdateUserDto) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let email = dto.email.map(|email| email.trim().to_lowercase());
        if let Some(email) = &email {
            if let Some(other) = repo.find_by_email(email).await? {
                if other.id != id {
                    return Err(AppError::Conflict(
                        "User with this email already exists".to_string(),
                    ));
                }
            }
        }

        let password_hash = match dto.password {
            Some(password) => Some(hash_password(password, self.bcrypt_cost).await?),
            None => None,
        };

        repo.update(
            id,
            UpdateUserParam {
                email,
                name: dto.name,
                password_hash,
                role: dto.role,
                google_sub: None,
            },
        )
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The deleted user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<User, AppError> {
        let user = self.get(id).await?;

        UserRepository::new(self.db).delete(id).await?;

        tracing::info!("Deleted user {}", id);

        Ok(user)
    }

    /// Creates the configured admin account unless its email is already registered.
    ///
    /// # Returns
    /// - `Ok(true)` - Admin created
    /// - `Ok(false)` - An account with that email already exists
    pub async fn ensure_admin(&self, email: &str, password: &str) -> Result<bool, AppError> {
        if UserRepository::new(self.db).email_exists(email).await? {
            return Ok(false);
        }

        self.create(CreateUserDto {
            email: email.to_string(),
            password: password.to_string(),
            name: Some("Administrator".to_string()),
            role: Some(Role::Admin),
        })
        .await?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests that creating a second account with the same email conflicts, ignoring
    /// case.
    ///
    /// Expected: Err(AppError::Conflict)
    #[tokio::test]
    async fn rejects_duplicate_email() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = UserService::new(db, 4);

        let dto = |email: &str| CreateUserDto {
            email: email.to_string(),
            password: "long enough".to_string(),
            name: None,
            role: None,
        };

        let user = service.create(dto("Ada@Example.com")).await?;
        let result = service.create(dto("ada@example.com")).await;

        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.role, Role::User);
        assert!(matches!(result, Err(AppError::Conflict(_))));

        Ok(())
    }

    /// Tests that the admin seed is idempotent.
    ///
    /// Expected: Ok(true) then Ok(false), one admin
    #[tokio::test]
    async fn seeds_admin_once() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = UserService::new(db, 4);

        assert!(service.ensure_admin("admin@example.com", "changeme!").await?);
        assert!(!service.ensure_admin("admin@example.com", "changeme!").await?);

        let admins: Vec<_> = service
            .get_all(None, None)
            .await?
            .into_iter()
            .filter(User::is_admin)
            .collect();
        assert_eq!(admins.len(), 1);

        Ok(())
    }

    /// Tests that updating to another account's email conflicts.
    ///
    /// Expected: Err(AppError::Conflict)
    #[tokio::test]
    async fn rejects_email_of_other_user() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let first = factory::create_user(db).await?;
        let second = factory::create_user(db).await?;

        let result = UserService::new(db, 4)
            .update(
                second.id,
                UpdateUserDto {
                    email: Some(first.email),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));

        Ok(())
    }

    /// Tests deleting an unknown user.
    ///
    /// Expected: Err(AppError::NotFound)
    #[tokio::test]
    async fn delete_unknown_is_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = UserService::new(db, 4).delete(99).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }
}
