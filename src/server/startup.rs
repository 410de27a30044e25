use std::time::Duration;

use axum::http::HeaderValue;
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::{Config, GOOGLE_AUTH_URL, GOOGLE_TOKEN_URL},
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    service::user::UserService,
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions only carry the OAuth CSRF state, so they expire after ten minutes of
/// inactivity. The cookie is marked secure when `APP_URL` is served over HTTPS.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer with the session table migrated
/// - `Err(AppError::InternalError)` - Creating the session table failed
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(config.app_url.starts_with("https://"))
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(10))))
}

/// Builds the outbound HTTP client shared by the importers and the Google login.
///
/// Redirects are disabled, as required for the OAuth token exchange.
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.http_timeout_seconds))
        .build()?;

    Ok(client)
}

/// Builds the Google OAuth client when all three Google variables are set.
///
/// # Returns
/// - `Ok(Some(OAuth2Client))` - Google login enabled
/// - `Ok(None)` - Google login not configured
/// - `Err(AppError::ConfigErr(InvalidEnvVar))` - `GOOGLE_REDIRECT_URL` is not a URL
pub fn setup_oauth_client(config: &Config) -> Result<Option<OAuth2Client>, AppError> {
    let Some(google) = &config.google else {
        tracing::info!("Google OAuth is not configured; Google login is disabled");
        return Ok(None);
    };

    let redirect_url = RedirectUrl::new(google.redirect_url.clone()).map_err(|e| {
        ConfigError::InvalidEnvVar {
            name: "GOOGLE_REDIRECT_URL".to_string(),
            value: google.redirect_url.clone(),
            reason: e.to_string(),
        }
    })?;
    let auth_url = AuthUrl::new(GOOGLE_AUTH_URL.to_string())
        .map_err(|e| AppError::InternalError(format!("Invalid Google auth URL: {}", e)))?;
    let token_url = TokenUrl::new(GOOGLE_TOKEN_URL.to_string())
        .map_err(|e| AppError::InternalError(format!("Invalid Google token URL: {}", e)))?;

    let client = BasicClient::new(ClientId::new(google.client_id.clone()))
        .set_client_secret(ClientSecret::new(google.client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(Some(client))
}

/// Builds the CORS layer from `CORS_ORIGINS`; `*` allows any origin.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer allowing the configured origins
/// - `Err(AppError::ConfigErr(InvalidEnvVar))` - An origin is not a valid header value
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins.iter().any(|origin| origin == "*") {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                name: "CORS_ORIGINS".to_string(),
                value: origin.clone(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

/// Seeds the admin account from `ADMIN_EMAIL`/`ADMIN_PASSWORD`.
///
/// Without both variables only a warning is logged when no admin exists yet.
pub async fn seed_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        if !UserRepository::new(db).admin_exists().await? {
            tracing::warn!(
                "No admin account exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one"
            );
        }
        return Ok(());
    };

    let created = UserService::new(db, config.bcrypt_cost)
        .ensure_admin(email, password)
        .await?;

    if created {
        tracing::info!("Created admin account {}", email);
    }

    Ok(())
}
