//! Playerboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! playerboard service. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and factories for inserting player records.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_player_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_player_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let player = factory::player::create_player(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
