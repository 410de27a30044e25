use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, Request, StatusCode,
    },
    response::Response,
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory, factory::user::DEFAULT_PASSWORD};
use tower::ServiceExt;

use crate::server::{
    config::Config,
    model::{
        import::{ImportKind, ImportSource},
        user::User,
    },
    router::router,
    startup::connect_to_session,
    service::{
        auth::token::TokenService,
        import::{jobs::ImportJobs, ImportContext, ImportService, ImportSettings},
        mail::Mailer,
    },
    state::AppState,
};

mod auth;
mod import;
mod resource;
mod user;

/// Router over `db`, with the session layer, plus the handles tests need to reach behind it.
struct TestApp {
    router: Router,
    tokens: TokenService,
    jobs: ImportJobs,
}

impl TestApp {
    async fn new(db: &DatabaseConnection) -> Self {
        let config = Config {
            bcrypt_cost: 4,
            ..Config::from_lookup(|name| match name {
                "DATABASE_URL" => Some("sqlite::memory:".to_string()),
                "JWT_SECRET" => Some("test-secret".to_string()),
                _ => None,
            })
            .unwrap()
        };
        let tokens = TokenService::new(&config.jwt_secret, config.jwt_ttl_minutes);
        let mailer = Mailer::log_only("Football Stats <no-reply@localhost>".parse().unwrap());
        let jobs = ImportJobs::new();
        let settings = ImportSettings {
            api_url: "http://127.0.0.1:9".to_string(),
            api_key: None,
            files_dir: std::env::temp_dir().join("football-stats-missing"),
            leagues: Vec::new(),
            season: None,
            source: ImportSource::Api,
        };
        let imports = ImportService::new(
            ImportContext::new(db.clone(), reqwest::Client::new(), settings),
            jobs.clone(),
        );

        let state = AppState::new(
            db.clone(),
            reqwest::Client::new(),
            None,
            tokens.clone(),
            mailer,
            imports,
            Arc::new(config),
        );

        let session = connect_to_session(db, &state.config).await.unwrap();

        Self {
            router: router(false).with_state(state).layer(session),
            tokens,
            jobs,
        }
    }

    fn token_for(&self, user: entity::user::Model) -> String {
        self.tokens.issue(&User::from_entity(user).unwrap()).unwrap()
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn json(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        };

        self.send(request.unwrap()).await
    }
}

async fn body_of(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
