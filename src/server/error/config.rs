use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check
    /// `.env.example` for the full list of configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be parsed into the expected type.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        name: String,
        value: String,
        reason: String,
    },

    /// Rate limiter settings were rejected by the governor builder.
    #[error("Invalid rate limit configuration: per second {per_second}, burst {burst}")]
    InvalidRateLimit { per_second: u64, burst: u32 },
}
