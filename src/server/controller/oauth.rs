use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, auth::AuthenticationResponseDto},
    server::{
        controller::extract::QueryParam,
        error::{auth::AuthError, AppError},
        middleware::session::CsrfSession,
        service::oauth::google::GoogleAuthService,
        state::AppState,
    },
};

use super::auth::AUTH_TAG;

/// Query parameters Google appends to the redirect URL.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code to exchange for an access token.
    pub code: String,
}

/// Redirects to the Google consent screen.
#[utoipa::path(
    get,
    path = "/api/v1/auth/google/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Google"),
        (status = 404, description = "Google login is not configured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn google_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let oauth_client = state.oauth_client.as_ref().ok_or(AuthError::OAuthDisabled)?;
    let auth_service = GoogleAuthService::new(&state.db, &state.http_client, oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Completes the Google login and responds with a bearer token.
#[utoipa::path(
    get,
    path = "/api/v1/auth/google/callback",
    tag = AUTH_TAG,
    params(CallbackParams),
    responses(
        (status = 200, description = "Successfully logged in", body = AuthenticationResponseDto),
        (status = 400, description = "CSRF mismatch, rejected code or unverified email", body = ErrorDto),
        (status = 404, description = "Google login is not configured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn google_callback(
    State(state): State<AppState>,
    session: Session,
    QueryParam(params): QueryParam<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let oauth_client = state.oauth_client.as_ref().ok_or(AuthError::OAuthDisabled)?;
    let auth_service = GoogleAuthService::new(&state.db, &state.http_client, oauth_client);

    CsrfSession::new(&session).validate(&params.state).await?;

    let user = auth_service.callback(params.code).await?;
    let access_token = state.tokens.issue(&user)?;

    tracing::info!("User {} logged in with Google", user.id);

    Ok((
        StatusCode::OK,
        Json(AuthenticationResponseDto {
            access_token,
            user: user.into_dto(),
        }),
    ))
}
