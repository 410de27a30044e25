use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::user::User,
    service::auth::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
