mod model;
mod server;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    model::import::ImportRequest,
    router,
    scheduler::imports::start_scheduler,
    service::{
        auth::token::TokenService,
        import::{jobs::ImportJobs, ImportContext, ImportService, ImportSettings},
        mail::Mailer,
    },
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client(&config)?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let cors = startup::setup_cors(&config)?;
    let mailer = Mailer::from_config(&config)?;
    let tokens = TokenService::new(&config.jwt_secret, config.jwt_ttl_minutes);

    startup::seed_admin(&db, &config).await?;

    let imports = ImportService::new(
        ImportContext::new(
            db.clone(),
            http_client.clone(),
            ImportSettings::from_config(&config),
        ),
        ImportJobs::new(),
    );

    if config.import_on_startup {
        let request = ImportRequest {
            source: config.import_source,
            ..Default::default()
        };
        imports.start_all(request).await?;

        tracing::info!("Started import from {}", config.import_source.as_str());
    }

    start_scheduler(db.clone(), imports.clone(), config.import_schedule.clone()).await?;

    let governor = GovernorConfigBuilder::default()
        .period(
            Duration::from_secs(1)
                .checked_div(u32::try_from(config.rate_limit_per_second).unwrap_or(0))
                .unwrap_or(Duration::ZERO),
        )
        .burst_size(config.rate_limit_burst)
        .finish()
        .ok_or(ConfigError::InvalidRateLimit {
            per_second: config.rate_limit_per_second,
            burst: config.rate_limit_burst,
        })?;

    let app = router::router(config.docs_expose_writes)
        .with_state(AppState::new(
            db,
            http_client,
            oauth_client,
            tokens,
            mailer,
            imports,
            config.clone(),
        ))
        .layer(session)
        .layer(GovernorLayer::new(governor))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", config.bind_addr, e)))?;

    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))
}
