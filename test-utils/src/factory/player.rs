//! Player factory for creating test player entities.
//!
//! This module provides factory methods for creating player entities with sensible
//! defaults. The leveling columns always follow the configured experience.

use crate::factory::helpers::{leveling, next_id};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// 2010-01-01T00:00:00Z in milliseconds.
const DEFAULT_BIRTHDAY_MILLIS: i64 = 1_262_304_000_000;

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let player = PlayerFactory::new(&db)
///     .name("Ragnar")
///     .profession("WARRIOR")
///     .experience(100)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    title: String,
    race: String,
    profession: String,
    birthday: DateTime<Utc>,
    experience: i32,
    banned: bool,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hero{id}"` where id is auto-incremented
    /// - title: `"Title {id}"`
    /// - race: `"HUMAN"`
    /// - profession: `"WARRIOR"`
    /// - birthday: 2010-01-01 UTC
    /// - experience: `1000`
    /// - banned: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `PlayerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hero{}", id),
            title: format!("Title {}", id),
            race: "HUMAN".to_string(),
            profession: "WARRIOR".to_string(),
            birthday: DateTime::from_timestamp_millis(DEFAULT_BIRTHDAY_MILLIS).unwrap_or_default(),
            experience: 1000,
            banned: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the race token, e.g. `"ELF"`.
    pub fn race(mut self, race: impl Into<String>) -> Self {
        self.race = race.into();
        self
    }

    /// Sets the profession token, e.g. `"DRUID"`.
    pub fn profession(mut self, profession: impl Into<String>) -> Self {
        self.profession = profession.into();
        self
    }

    /// Sets the birthday from milliseconds since the Unix epoch.
    pub fn birthday_millis(mut self, millis: i64) -> Self {
        self.birthday = DateTime::from_timestamp_millis(millis).unwrap_or_default();
        self
    }

    pub fn experience(mut self, experience: i32) -> Self {
        self.experience = experience;
        self
    }

    pub fn banned(mut self, banned: bool) -> Self {
        self.banned = banned;
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        let (level, until_next_level) = leveling(self.experience);

        entity::player::ActiveModel {
            name: ActiveValue::Set(self.name),
            title: ActiveValue::Set(self.title),
            race: ActiveValue::Set(self.race),
            profession: ActiveValue::Set(self.profession),
            birthday: ActiveValue::Set(self.birthday),
            experience: ActiveValue::Set(self.experience),
            level: ActiveValue::Set(level),
            until_next_level: ActiveValue::Set(until_next_level),
            banned: ActiveValue::Set(self.banned),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values.
///
/// Shorthand for `PlayerFactory::new(db).build().await`.
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}

/// Creates a player with a specific name and default values otherwise.
pub async fn create_player_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).name(name).build().await
}
