use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored user row carries a role outside `admin` / `user`.
    #[error("User {user_id} has unknown role '{role}'")]
    UnknownRole { user_id: i32, role: String },

    /// An outgoing email could not be assembled or delivered.
    #[error("Failed to send email: {0}")]
    Mail(String),

    /// A blocking task (password hashing) panicked or was cancelled.
    #[error("Background task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
