//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
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
//!     // Create with defaults
//!     let player = factory::player::create_player(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory::player::PlayerFactory;
//!
//! let player = PlayerFactory::new(&db)
//!     .name("Камираж")
//!     .race("ELF")
//!     .experience(300)
//!     .banned(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `player` - Player records with leveling fields derived from experience

pub mod helpers;
pub mod player;
