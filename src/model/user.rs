use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Account role. Admins may write resources, trigger imports and manage users.
#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            _ => None,
        }
    }
}

/// Public view of an account. Never carries the password hash.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
    /// Whether a Google account is linked.
    pub google_linked: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug)]
pub struct CreateUserDto {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub name: Option<String>,
    /// Defaults to `user`.
    pub role: Option<Role>,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug, Default)]
pub struct UpdateUserDto {
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
}
