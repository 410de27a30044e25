//! Environment configuration.
//!
//! `Config::from_env()` reads every setting once at startup, after `dotenvy` has loaded
//! `.env`. Only `DATABASE_URL` and `JWT_SECRET` are required; everything else has a
//! default or disables the feature it configures.

use std::{net::SocketAddr, path::PathBuf, str::FromStr};

use crate::server::{
    error::{config::ConfigError, AppError},
    model::import::ImportSource,
};

pub const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

const DEFAULT_API_FOOTBALL_URL: &str = "https://v3.football.api-sports.io";

/// Google OAuth client settings. Present only when all three variables are set.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
}

/// SMTP relay settings. Present only when `SMTP_HOST` is set.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Public base URL, used in password reset links.
    pub app_url: String,

    pub jwt_secret: String,
    pub jwt_ttl_minutes: i64,
    pub bcrypt_cost: u32,
    pub reset_token_ttl_minutes: i64,

    pub api_football_url: String,
    pub api_football_key: Option<String>,
    pub http_timeout_seconds: u64,
    pub files_dir: PathBuf,
    pub import_leagues: Vec<i64>,
    pub import_season: Option<i32>,
    pub import_on_startup: bool,
    pub import_source: ImportSource,
    pub import_schedule: Option<String>,

    pub google: Option<GoogleConfig>,

    pub smtp: Option<SmtpConfig>,
    pub mail_from: String,

    /// Allowed CORS origins; `*` allows any.
    pub cors_origins: Vec<String>,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
    pub docs_expose_writes: bool,

    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    /// Loads the configuration from process environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and parsable
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `DATABASE_URL` or `JWT_SECRET` unset
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A variable failed to parse
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through `lookup`, which returns the raw value of a
    /// variable or `None` when unset. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env { lookup };

        let google = match (
            env.get("GOOGLE_CLIENT_ID"),
            env.get("GOOGLE_CLIENT_SECRET"),
            env.get("GOOGLE_REDIRECT_URL"),
        ) {
            (Some(client_id), Some(client_secret), Some(redirect_url)) => Some(GoogleConfig {
                client_id,
                client_secret,
                redirect_url,
            }),
            _ => None,
        };

        let smtp = match env.get("SMTP_HOST") {
            Some(host) => Some(SmtpConfig {
                host,
                port: env.parse_or("SMTP_PORT", 587)?,
                username: env.get("SMTP_USERNAME"),
                password: env.get("SMTP_PASSWORD"),
            }),
            None => None,
        };

        Ok(Self {
            database_url: env.required("DATABASE_URL")?,
            bind_addr: env.parse_or("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 3030)))?,
            app_url: env
                .get("APP_URL")
                .unwrap_or_else(|| "http://localhost:3030".to_string()),

            jwt_secret: env.required("JWT_SECRET")?,
            jwt_ttl_minutes: env.parse_or("JWT_TTL_MINUTES", 1440)?,
            bcrypt_cost: env.parse_or("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
            reset_token_ttl_minutes: env.parse_or("RESET_TOKEN_TTL_MINUTES", 60)?,

            api_football_url: env
                .get("API_FOOTBALL_URL")
                .unwrap_or_else(|| DEFAULT_API_FOOTBALL_URL.to_string()),
            api_football_key: env.get("API_FOOTBALL_KEY"),
            http_timeout_seconds: env.parse_or("HTTP_TIMEOUT_SECONDS", 30)?,
            files_dir: env
                .get("FILES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("files")),
            import_leagues: env.list("IMPORT_LEAGUES")?,
            import_season: env.parse_optional("IMPORT_SEASON")?,
            import_on_startup: env.flag("IMPORT_ON_STARTUP", false)?,
            import_source: match env.get("IMPORT_SOURCE") {
                None => ImportSource::Api,
                Some(value) => match value.as_str() {
                    "api" => ImportSource::Api,
                    "file" => ImportSource::File,
                    _ => {
                        return Err(invalid("IMPORT_SOURCE", &value, "expected api or file"));
                    }
                },
            },
            import_schedule: env.get("IMPORT_SCHEDULE"),

            google,

            smtp,
            mail_from: env
                .get("MAIL_FROM")
                .unwrap_or_else(|| "Football Stats <no-reply@localhost>".to_string()),

            cors_origins: env
                .get("CORS_ORIGINS")
                .map(|value| {
                    value
                        .split(',')
                        .map(|origin| origin.trim().to_string())
                        .filter(|origin| !origin.is_empty())
                        .collect()
                })
                .unwrap_or_else(|| vec!["*".to_string()]),
            rate_limit_per_second: env.parse_or("RATE_LIMIT_PER_SECOND", 10)?,
            rate_limit_burst: env.parse_or("RATE_LIMIT_BURST", 30)?,
            docs_expose_writes: env.flag("DOCS_EXPOSE_WRITES", false)?,

            admin_email: env.get("ADMIN_EMAIL"),
            admin_password: env.get("ADMIN_PASSWORD"),
        })
    }
}

fn invalid(name: &str, value: &str, reason: impl ToString) -> AppError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

struct Env<F> {
    lookup: F,
}

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Option<String> {
        (self.lookup)(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn required(&self, name: &str) -> Result<String, AppError> {
        self.get(name)
            .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()).into())
    }

    fn parse_optional<T>(&self, name: &str) -> Result<Option<T>, AppError>
    where
        T: FromStr,
        T::Err: ToString,
    {
        match self.get(name) {
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|e: T::Err| invalid(name, &value, e)),
            None => Ok(None),
        }
    }

    fn parse_or<T>(&self, name: &str, default: T) -> Result<T, AppError>
    where
        T: FromStr,
        T::Err: ToString,
    {
        Ok(self.parse_optional(name)?.unwrap_or(default))
    }

    fn flag(&self, name: &str, default: bool) -> Result<bool, AppError> {
        match self.get(name) {
            None => Ok(default),
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(invalid(name, &value, "expected a boolean")),
            },
        }
    }

    fn list<T>(&self, name: &str) -> Result<Vec<T>, AppError>
    where
        T: FromStr,
        T::Err: ToString,
    {
        let Some(value) = self.get(name) else {
            return Ok(Vec::new());
        };

        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| item.parse().map_err(|e: T::Err| invalid(name, item, e)))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(move |name| vars.get(name).cloned())
    }

    /// Tests that only the two required variables are needed and defaults apply.
    ///
    /// Expected: Ok with default bind address, TTLs, rate limits and no optional features
    #[test]
    fn applies_defaults() {
        let config = config_from(&[("DATABASE_URL", "sqlite::memory:"), ("JWT_SECRET", "s")])
            .unwrap();

        assert_eq!(config.bind_addr.port(), 3030);
        assert_eq!(config.jwt_ttl_minutes, 1440);
        assert_eq!(config.reset_token_ttl_minutes, 60);
        assert_eq!(config.rate_limit_per_second, 10);
        assert_eq!(config.rate_limit_burst, 30);
        assert_eq!(config.import_source, ImportSource::Api);
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
        assert!(config.google.is_none());
        assert!(config.smtp.is_none());
        assert!(!config.docs_expose_writes);
    }

    /// Tests that a missing required variable is reported by name.
    ///
    /// Expected: Err(MissingEnvVar("JWT_SECRET"))
    #[test]
    fn reports_missing_required_variable() {
        let result = config_from(&[("DATABASE_URL", "sqlite::memory:")]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "JWT_SECRET"
        ));
    }

    /// Tests parsing of lists, flags and the optional feature groups.
    ///
    /// Expected: leagues parsed in order, Google enabled, SMTP enabled with default port
    #[test]
    fn parses_optional_groups() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "s"),
            ("IMPORT_LEAGUES", "39, 140,61"),
            ("IMPORT_SEASON", "2024"),
            ("IMPORT_SOURCE", "file"),
            ("DOCS_EXPOSE_WRITES", "true"),
            ("GOOGLE_CLIENT_ID", "id"),
            ("GOOGLE_CLIENT_SECRET", "secret"),
            ("GOOGLE_REDIRECT_URL", "http://localhost/callback"),
            ("SMTP_HOST", "smtp.example.com"),
        ])
        .unwrap();

        assert_eq!(config.import_leagues, vec![39, 140, 61]);
        assert_eq!(config.import_season, Some(2024));
        assert_eq!(config.import_source, ImportSource::File);
        assert!(config.docs_expose_writes);
        assert!(config.google.is_some());
        assert_eq!(config.smtp.map(|smtp| smtp.port), Some(587));
    }

    /// Tests that an unparsable value is rejected rather than defaulted.
    ///
    /// Expected: Err(InvalidEnvVar) naming RATE_LIMIT_BURST
    #[test]
    fn rejects_invalid_number() {
        let result = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "s"),
            ("RATE_LIMIT_BURST", "lots"),
        ]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { name, .. })) if name == "RATE_LIMIT_BURST"
        ));
    }
}
