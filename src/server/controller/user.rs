use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::{
            extract::{JsonBody, PathParam, QueryParam},
            param::PaginationParam,
        },
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::user::UserService,
        state::AppState,
    },
};

pub static USER_TAG: &str = "users";

#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The authenticated user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(PaginationParam),
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    QueryParam(pagination): QueryParam<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db, state.config.bcrypt_cost)
        .get_all(pagination.limit, pagination.skip)
        .await?;

    let users_dto: Vec<UserDto> = users.into_iter().map(|user| user.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let user = UserService::new(&state.db, state.config.bcrypt_cost)
        .create(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db, state.config.bcrypt_cost)
        .get(id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let user = UserService::new(&state.db, state.config.bcrypt_cost)
        .update(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted user", body = UserDto),
        (status = 400, description = "Admins cannot delete themselves", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    if admin.id == id {
        return Err(AppError::BadRequest(
            "Users are not allowed to delete themselves".to_string(),
        ));
    }

    let user = UserService::new(&state.db, state.config.bcrypt_cost)
        .delete(id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
