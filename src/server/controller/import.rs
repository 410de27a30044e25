use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        import::{ImportJobDto, ImportStartedDto},
    },
    server::{
        controller::{extract::QueryParam, param::RefreshParam},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::import::ImportJobStatus,
        service::import::kinds_for,
        state::AppState,
    },
};

pub static IMPORT_TAG: &str = "imports";

/// Lists the status of every importer in dependency order.
#[utoipa::path(
    get,
    path = "/api/v1/imports",
    tag = IMPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Status of every importer", body = Vec<ImportJobDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_imports(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let jobs: Vec<ImportJobDto> = state
        .imports
        .status()
        .await
        .into_iter()
        .map(ImportJobStatus::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(jobs)))
}

/// Starts one background job running every importer in dependency order.
#[utoipa::path(
    post,
    path = "/api/v1/imports/refresh",
    tag = IMPORT_TAG,
    security(("bearer" = [])),
    params(RefreshParam),
    responses(
        (status = 202, description = "Import started", body = ImportStartedDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "An importer is already running", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh_all(
    State(state): State<AppState>,
    headers: HeaderMap,
    QueryParam(param): QueryParam<RefreshParam>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let request = param.into_request(state.imports.settings().source);
    state.imports.start_all(request).await?;

    tracing::info!(
        "User {} started a full import from {}",
        admin.id,
        request.source.as_str()
    );

    let importers = kinds_for(request.source)
        .into_iter()
        .map(|kind| kind.to_string())
        .collect();

    Ok((
        StatusCode::ACCEPTED,
        Json(ImportStartedDto {
            importers,
            source: request.source.as_str().to_string(),
        }),
    ))
}
