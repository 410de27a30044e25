//! Factory methods for creating test data.
//!
//! Factories insert entities with unique defaults so tests only spell out the
//! fields they care about. Entities that other rows depend on (leagues, teams,
//! players, fixtures, bookmakers, bets, users) all have a factory.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let team = factory::create_team(&db).await?;
//!     let (league, home, away, fixture) =
//!         factory::helpers::create_fixture_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let team = factory::team::TeamFactory::new(&db)
//!     .api_team_id(33)
//!     .name("Manchester United")
//!     .build()
//!     .await?;
//! ```

pub mod coach;
pub mod country;
pub mod fixture;
pub mod helpers;
pub mod league;
pub mod odds;
pub mod player;
pub mod team;
pub mod user;
pub mod venue;

pub use coach::create_coach;
pub use country::{create_country, create_country_named};
pub use league::create_league;
pub use odds::{create_bet, create_bookmaker};
pub use player::{create_player, create_player_with_api_id};
pub use team::{create_team, create_team_with_api_id};
pub use user::{create_admin, create_user};
pub use venue::create_venue;
