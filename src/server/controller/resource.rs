//! Generic CRUD handlers shared by every provider-sourced table.
//!
//! The handlers are instantiated once per [`Resource`] by the router. Their OpenAPI
//! operations are assembled in `docs` since `#[utoipa::path]` cannot describe a
//! generic handler.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::server::{
    controller::{
        extract::{JsonBody, PathParam, QueryParam},
        param::{PaginationParam, RefreshParam},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::resource::Resource,
    service::resource::ResourceService,
    state::AppState,
};

/// GET /api/v1/{resource}
pub async fn find<R: Resource>(
    State(state): State<AppState>,
    headers: HeaderMap,
    QueryParam(pagination): QueryParam<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let rows = ResourceService::<R>::new(&state.db)
        .find(pagination.limit, pagination.skip)
        .await?;

    Ok((StatusCode::OK, Json(rows)))
}

/// GET /api/v1/{resource}/{id}
pub async fn get<R: Resource>(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let row = ResourceService::<R>::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(row)))
}

/// POST /api/v1/{resource}
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<Value>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let row = ResourceService::<R>::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// PATCH /api/v1/{resource}/{id}
pub async fn patch<R: Resource>(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<Value>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let row = ResourceService::<R>::new(&state.db)
        .patch(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(row)))
}

/// DELETE /api/v1/{resource}/{id}
pub async fn remove<R: Resource>(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let row = ResourceService::<R>::new(&state.db).remove(id).await?;

    Ok((StatusCode::OK, Json(row)))
}

/// POST /api/v1/{resource}/refresh
///
/// Starts the importer feeding the resource's table and answers before it finishes.
pub async fn refresh<R: Resource>(
    State(state): State<AppState>,
    headers: HeaderMap,
    QueryParam(param): QueryParam<RefreshParam>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let request = param.into_request(state.imports.settings().source);
    let job = state.imports.start(R::IMPORT, request).await?;

    tracing::info!(
        "User {} started import '{}' for {}",
        admin.id,
        R::IMPORT,
        R::PATH
    );

    Ok((StatusCode::ACCEPTED, Json(job.into_dto())))
}
