use axum::{
    routing::{get, post},
    Router,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{access_token, authenticate, test_token},
        health::health,
        import::{get_imports, refresh_all},
        oauth::{google_callback, google_login},
        password::{recover_password, reset_password},
        resource,
        user::{create_user, delete_user, get_me, get_user, get_users, update_user},
    },
    docs,
    error::AppError,
    model::resource::{visit_resources, Resource, ResourceVisitor},
    state::AppState,
};

/// Builds every route of the API plus the Swagger UI.
///
/// # Arguments
/// - `docs_expose_writes` - Whether resource write operations appear in the document
pub fn router(docs_expose_writes: bool) -> Router<AppState> {
    let mut resources = ResourceRoutes {
        router: Router::new(),
    };
    visit_resources(&mut resources);

    Router::new()
        .route("/health", get(health))
        .route("/authentication", post(authenticate))
        .route("/api/v1/login/access-token", post(access_token))
        .route("/api/v1/login/test-token", post(test_token))
        .route("/api/v1/auth/google/login", get(google_login))
        .route("/api/v1/auth/google/callback", get(google_callback))
        .route("/api/v1/password-recovery/{email}", post(recover_password))
        .route("/api/v1/reset-password", post(reset_password))
        .route("/api/v1/users/me", get(get_me))
        .route("/api/v1/users", get(get_users).post(create_user))
        .route(
            "/api/v1/users/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .route("/api/v1/imports", get(get_imports))
        .route("/api/v1/imports/refresh", post(refresh_all))
        .merge(resources.router)
        .merge(
            SwaggerUi::new("/docs")
                .url("/api-docs/openapi.json", docs::openapi(docs_expose_writes)),
        )
        .fallback(not_found)
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

/// Registers the CRUD and refresh routes of each resource.
struct ResourceRoutes {
    router: Router<AppState>,
}

impl ResourceVisitor for ResourceRoutes {
    fn visit<R: Resource>(&mut self) {
        let collection = format!("/api/v1/{}", R::PATH);

        self.router = std::mem::take(&mut self.router)
            .route(
                &collection,
                get(resource::find::<R>).post(resource::create::<R>),
            )
            .route(
                &format!("{}/{{id}}", collection),
                get(resource::get::<R>)
                    .patch(resource::patch::<R>)
                    .delete(resource::remove::<R>),
            )
            .route(
                &format!("{}/refresh", collection),
                post(resource::refresh::<R>),
            );
    }
}
