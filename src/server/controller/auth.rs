use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthenticationRequestDto, AuthenticationResponseDto, LoginFormDto, TokenDto},
        user::UserDto,
    },
    server::{
        controller::extract::{FormBody, JsonBody},
        error::{auth::AuthError, AppError},
        middleware::auth::AuthGuard,
        service::auth::AuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Strategy accepted by the legacy authentication endpoint.
const LOCAL_STRATEGY: &str = "local";

/// Legacy email/password login returning the token together with the account.
#[utoipa::path(
    post,
    path = "/authentication",
    tag = AUTH_TAG,
    request_body = AuthenticationRequestDto,
    responses(
        (status = 201, description = "Successfully authenticated", body = AuthenticationResponseDto),
        (status = 400, description = "Unsupported strategy", body = ErrorDto),
        (status = 401, description = "Incorrect email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn authenticate(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AuthenticationRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.strategy != LOCAL_STRATEGY {
        return Err(AuthError::UnsupportedStrategy(payload.strategy).into());
    }

    let (access_token, user) = AuthService::new(&state.db, &state.tokens)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthenticationResponseDto {
            access_token,
            user: user.into_dto(),
        }),
    ))
}

/// OAuth2 password-grant style login; `username` carries the email.
#[utoipa::path(
    post,
    path = "/api/v1/login/access-token",
    tag = AUTH_TAG,
    request_body(content = LoginFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Bearer token issued", body = TokenDto),
        (status = 401, description = "Incorrect email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn access_token(
    State(state): State<AppState>,
    FormBody(form): FormBody<LoginFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, _) = AuthService::new(&state.db, &state.tokens)
        .login(&form.username, &form.password)
        .await?;

    Ok((StatusCode::OK, Json(TokenDto::bearer(token))))
}

/// Returns the caller of a valid bearer token.
#[utoipa::path(
    post,
    path = "/api/v1/login/test-token",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Token is valid", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn test_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
