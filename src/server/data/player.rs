//! Player data repository for database operations.
//!
//! This module provides the `PlayerRepository` for managing player records. It lowers
//! `PlayerFilter` criteria into SeaORM conditions and converts entity models into domain
//! models at the infrastructure boundary. No validation happens here; callers pass
//! already-validated values.

use entity::player::Column;
use sea_orm::{
    sea_query::{Expr, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    filter::{Bounds, PlayerCondition, PlayerFilter},
    player::{NewPlayer, PageRequest, Player, PlayerChanges, PlayerOrder},
};

/// Repository providing database operations for players.
pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    /// Creates a new PlayerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a validated player and returns it with its assigned ID.
    ///
    /// # Arguments
    /// - `player` - Validated player including derived leveling fields
    ///
    /// # Returns
    /// - `Ok(Player)` - The stored player
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, player: NewPlayer) -> Result<Player, DbErr> {
        let entity = entity::player::ActiveModel {
            name: ActiveValue::Set(player.name),
            title: ActiveValue::Set(player.title),
            race: ActiveValue::Set(player.race.as_token().to_string()),
            profession: ActiveValue::Set(player.profession.as_token().to_string()),
            birthday: ActiveValue::Set(player.birthday),
            experience: ActiveValue::Set(player.leveling.experience),
            level: ActiveValue::Set(player.leveling.level),
            until_next_level: ActiveValue::Set(player.leveling.until_next_level),
            banned: ActiveValue::Set(player.banned),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Player::from_entity(entity)
    }

    /// Finds a player by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - Player found
    /// - `Ok(None)` - No player with that ID
    /// - `Err(DbErr)` - Database error or corrupt stored enum token
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Player>, DbErr> {
        let entity = entity::prelude::Player::find_by_id(id).one(self.db).await?;

        entity.map(Player::from_entity).transpose()
    }

    /// Writes the supplied changes to an existing player.
    ///
    /// Only columns present in `changes` are written. With no changes the stored player
    /// is returned as is.
    ///
    /// # Arguments
    /// - `id` - ID of an existing player
    /// - `changes` - Validated column changes
    ///
    /// # Returns
    /// - `Ok(Player)` - The player after the update
    /// - `Err(DbErr::RecordNotFound)` - No player with that ID and no changes to write
    /// - `Err(DbErr)` - Database error, including `RecordNotUpdated` for a missing player
    pub async fn update(&self, id: i32, changes: PlayerChanges) -> Result<Player, DbErr> {
        if changes.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| DbErr::RecordNotFound(format!("Player with id {} not found", id)));
        }

        let mut active_model = entity::player::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ..Default::default()
        };

        if let Some(name) = changes.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(title) = changes.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(race) = changes.race {
            active_model.race = ActiveValue::Set(race.as_token().to_string());
        }
        if let Some(profession) = changes.profession {
            active_model.profession = ActiveValue::Set(profession.as_token().to_string());
        }
        if let Some(birthday) = changes.birthday {
            active_model.birthday = ActiveValue::Set(birthday);
        }
        if let Some(banned) = changes.banned {
            active_model.banned = ActiveValue::Set(banned);
        }
        if let Some(leveling) = changes.leveling {
            active_model.experience = ActiveValue::Set(leveling.experience);
            active_model.level = ActiveValue::Set(leveling.level);
            active_model.until_next_level = ActiveValue::Set(leveling.until_next_level);
        }

        let entity = active_model.update(self.db).await?;

        Player::from_entity(entity)
    }

    /// Deletes a player by ID.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows, 0 if the player did not exist
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Player::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets one page of players matching the filter.
    ///
    /// Players are sorted ascending by the requested field, with ties broken by ID so
    /// consecutive pages never overlap.
    ///
    /// # Arguments
    /// - `filter` - Criteria to match
    /// - `page` - Zero-based page, page size and sort order
    ///
    /// # Returns
    /// - `Ok(Vec<Player>)` - Players on the requested page, empty past the last page
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: &PlayerFilter,
        page: PageRequest,
    ) -> Result<Vec<Player>, DbErr> {
        let mut query = entity::prelude::Player::find()
            .filter(filter_condition(filter))
            .order_by_asc(order_column(page.order));

        if page.order != PlayerOrder::Id {
            query = query.order_by_asc(Column::Id);
        }

        let players = query
            .paginate(self.db, page.per_page)
            .fetch_page(page.page)
            .await?;

        players.into_iter().map(Player::from_entity).collect()
    }

    /// Counts players matching the filter.
    pub async fn count(&self, filter: &PlayerFilter) -> Result<u64, DbErr> {
        entity::prelude::Player::find()
            .filter(filter_condition(filter))
            .count(self.db)
            .await
    }
}

fn order_column(order: PlayerOrder) -> Column {
    match order {
        PlayerOrder::Id => Column::Id,
        PlayerOrder::Name => Column::Name,
        PlayerOrder::Experience => Column::Experience,
        PlayerOrder::Birthday => Column::Birthday,
        PlayerOrder::Level => Column::Level,
    }
}

/// Lowers the filter's conditions into a single AND condition.
fn filter_condition(filter: &PlayerFilter) -> Condition {
    filter
        .conditions()
        .into_iter()
        .fold(Condition::all(), |condition, player_condition| {
            match player_condition {
                // LIKE is case-insensitive for ASCII on SQLite, instr() is not
                PlayerCondition::NameContains(name) => {
                    condition.add(Expr::cust_with_values(r#"instr("name", ?) > 0"#, [name]))
                }
                PlayerCondition::TitleContains(title) => {
                    condition.add(Column::Title.like(contains_pattern(&title)))
                }
                PlayerCondition::RaceIs(race) => condition.add(Column::Race.eq(race.as_token())),
                PlayerCondition::ProfessionIs(profession) => {
                    condition.add(Column::Profession.eq(profession.as_token()))
                }
                PlayerCondition::BirthdayWithin(bounds) => {
                    within(condition, Column::Birthday, bounds)
                }
                PlayerCondition::BannedIs(banned) => condition.add(Column::Banned.eq(banned)),
                PlayerCondition::ExperienceWithin(bounds) => {
                    within(condition, Column::Experience, bounds)
                }
                PlayerCondition::LevelWithin(bounds) => within(condition, Column::Level, bounds),
            }
        })
}

fn within<V>(condition: Condition, column: Column, bounds: Bounds<V>) -> Condition
where
    V: Into<sea_orm::Value>,
{
    condition
        .add_option(bounds.min.map(|min| column.gte(min)))
        .add_option(bounds.max.map(|max| column.lte(max)))
}

/// Builds `%…%` with LIKE wildcards in `text` matched literally.
fn contains_pattern(text: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}

