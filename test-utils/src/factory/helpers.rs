//! Shared helper utilities for factory methods.
//!
//! Provides unique id generation and convenience methods for creating entities
//! together with the rows they reference.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique ids in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used for external ids (`api_*_id`) and names so factory rows never collide on
/// unique columns.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a fixture together with its league and both teams.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((league, home, away, fixture))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_fixture_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::league::Model,
        entity::team::Model,
        entity::team::Model,
        entity::fixture::Model,
    ),
    DbErr,
> {
    let league = crate::factory::league::create_league(db).await?;
    let home = crate::factory::team::create_team(db).await?;
    let away = crate::factory::team::create_team(db).await?;
    let fixture = crate::factory::fixture::FixtureFactory::new(db, league.id, home.id, away.id)
        .build()
        .await?;

    Ok((league, home, away, fixture))
}
