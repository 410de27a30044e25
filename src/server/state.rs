//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through
//! Axum's state extraction. It holds the database pool, the outbound HTTP and OAuth
//! clients, the token and mail services, the import service and the configuration.

use std::sync::Arc;

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    service::{auth::token::TokenService, import::ImportService, mail::Mailer},
};

/// Type alias for the OAuth2 client configured for Google authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `TokenService` holds reference-counted keys
/// - `ImportService` shares its job registry between clones
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for outbound requests (Google userinfo, API-Football).
    ///
    /// Configured without redirects and with the configured timeout.
    pub http_client: reqwest::Client,

    /// OAuth2 client for Google login; `None` when Google is not configured.
    pub oauth_client: Option<OAuth2Client>,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,

    /// Sends password reset mails.
    pub mailer: Mailer,

    /// Starts import jobs and reports their status.
    pub imports: ImportService,

    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for outbound requests
    /// - `oauth_client` - Google OAuth2 client, if configured
    /// - `tokens` - Bearer token service
    /// - `mailer` - Outgoing mail transport
    /// - `imports` - Import job service
    /// - `config` - Application configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: Option<OAuth2Client>,
        tokens: TokenService,
        mailer: Mailer,
        imports: ImportService,
        config: Arc<Config>,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            tokens,
            mailer,
            imports,
            config,
        }
    }
}
