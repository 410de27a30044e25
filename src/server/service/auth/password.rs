//! bcrypt hashing on the blocking thread pool.

use crate::server::error::{auth::AuthError, internal::InternalError, AppError};

/// Hashes `password` with bcrypt at `cost`.
///
/// # Returns
/// - `Ok(String)` - The bcrypt hash
/// - `Err(AppError::AuthErr(PasswordHash))` - bcrypt rejected the input or cost
/// - `Err(AppError::InternalErr(TaskJoin))` - The blocking task panicked
pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(InternalError::from)?
        .map_err(AuthError::from)?;

    Ok(hash)
}

/// Checks `password` against a bcrypt `hash`.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::AuthErr(PasswordHash))` - The hash is malformed
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(InternalError::from)?
        .map_err(AuthError::from)?;

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn verifies_own_hash() -> Result<(), AppError> {
        let hash = hash_password("hunter22".to_string(), 4).await?;

        assert!(verify_password("hunter22".to_string(), hash.clone()).await?);
        assert!(!verify_password("hunter23".to_string(), hash).await?);

        Ok(())
    }
}
