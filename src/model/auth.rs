use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::user::UserDto;

/// OAuth2 password-grant style form used by `/login/access-token`.
#[derive(Deserialize, ToSchema, Debug)]
pub struct LoginFormDto {
    /// Account email.
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct TokenDto {
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: String,
}

impl TokenDto {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Body of the legacy `POST /authentication` endpoint.
#[derive(Deserialize, ToSchema, Debug)]
pub struct AuthenticationRequestDto {
    /// Only `local` is supported.
    pub strategy: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationResponseDto {
    pub access_token: String,
    pub user: UserDto,
}

#[derive(Deserialize, ToSchema, Validate, Debug)]
pub struct ResetPasswordDto {
    pub token: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}
