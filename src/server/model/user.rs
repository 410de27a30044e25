//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{Role, UserDto},
    server::error::{internal::InternalError, AppError},
};

/// Application account as seen by services.
///
/// Carries the password hash for credential checks; `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
    pub password_hash: Option<String>,
    pub google_sub: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user
    /// - `Err(AppError::InternalErr(UnknownRole))` - Stored role is not `admin` or `user`
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = Role::parse(&entity.role).ok_or_else(|| InternalError::UnknownRole {
            user_id: entity.id,
            role: entity.role.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role,
            password_hash: entity.password_hash,
            google_sub: entity.google_sub,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
            google_linked: self.google_sub.is_some(),
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub name: Option<String>,
    pub password_hash: Option<String>,
    pub role: Role,
    pub google_sub: Option<String>,
}

/// Partial user update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<Role>,
    pub google_sub: Option<String>,
}
