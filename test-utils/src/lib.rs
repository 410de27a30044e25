//! Football Stats Test Utils
//!
//! Shared testing utilities for the football statistics server. Provides a builder for
//! test contexts backed by in-memory SQLite databases and factories for the entities
//! most tests depend on.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with unique defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::{Country, League};
//!
//! #[tokio::test]
//! async fn league_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Country)
//!         .with_table(League)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
