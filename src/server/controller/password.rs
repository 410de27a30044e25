use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::ResetPasswordDto,
    },
    server::{
        controller::extract::{JsonBody, PathParam},
        error::AppError,
        service::password_reset::PasswordResetService,
        state::AppState,
    },
};

use super::auth::AUTH_TAG;

/// Emails a password reset link. Answers the same whether or not the account exists.
#[utoipa::path(
    post,
    path = "/api/v1/password-recovery/{email}",
    tag = AUTH_TAG,
    params(
        ("email" = String, Path, description = "Account email")
    ),
    responses(
        (status = 200, description = "Recovery mail sent if the account exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recover_password(
    State(state): State<AppState>,
    PathParam(email): PathParam<String>,
) -> Result<impl IntoResponse, AppError> {
    PasswordResetService::new(&state.db, &state.mailer, &state.config)
        .request(&email)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Password recovery email sent")),
    ))
}

/// Redeems a reset token and sets the new password.
#[utoipa::path(
    post,
    path = "/api/v1/reset-password",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password updated", body = MessageDto),
        (status = 400, description = "Token expired or already used, or password too short", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    PasswordResetService::new(&state.db, &state.mailer, &state.config)
        .reset(&payload.token, payload.new_password)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Password updated successfully"))))
}
