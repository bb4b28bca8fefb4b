use sea_orm::DatabaseConnection;

use crate::server::{
    data::player::PlayerRepository,
    error::AppError,
    model::{
        filter::PlayerFilter,
        player::{
            CreatePlayerParams, Leveling, NewPlayer, PageRequest, Player, PlayerChanges,
            UpdatePlayerParams, MAX_NAME_LEN, MAX_TITLE_LEN,
        },
    },
};
use chrono::{DateTime, Utc};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of players matching the filter
    pub async fn get_paginated(
        &self,
        filter: &PlayerFilter,
        page: PageRequest,
    ) -> Result<Vec<Player>, AppError> {
        let repo = PlayerRepository::new(self.db);

        Ok(repo.get_paginated(filter, page).await?)
    }

    /// Counts players matching the filter
    pub async fn count(&self, filter: &PlayerFilter) -> Result<u64, AppError> {
        let repo = PlayerRepository::new(self.db);

        Ok(repo.count(filter).await?)
    }

    /// Validates and stores a new player.
    ///
    /// Name, title, race, profession, birthday and experience are required. `banned`
    /// defaults to `false` and the leveling fields are derived from experience.
    ///
    /// # Returns
    /// - `Ok(Player)` - The stored player with its assigned ID
    /// - `Err(AppError::BadRequest)` - Missing field or a value out of range
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreatePlayerParams) -> Result<Player, AppError> {
        let invalid = || AppError::BadRequest("Data params not valid".to_string());

        let name = params.name.ok_or_else(invalid)?;
        let title = params.title.ok_or_else(invalid)?;
        let race = params.race.ok_or_else(invalid)?;
        let profession = params.profession.ok_or_else(invalid)?;
        let birthday = params.birthday.ok_or_else(invalid)?;
        let leveling = params
            .experience
            .and_then(Leveling::from_experience)
            .ok_or_else(invalid)?;

        if !is_valid_name(&name) || !is_valid_title(&title) || !is_valid_birthday(&birthday) {
            return Err(invalid());
        }

        let repo = PlayerRepository::new(self.db);
        let player = repo
            .create(NewPlayer {
                name,
                title,
                race,
                profession,
                birthday,
                leveling,
                banned: params.banned.unwrap_or(false),
            })
            .await?;

        tracing::debug!("Created player {} ({})", player.id, player.name);

        Ok(player)
    }

    /// Gets a player by ID.
    ///
    /// # Returns
    /// - `Ok(Player)` - The player
    /// - `Err(AppError::BadRequest)` - ID is zero or negative
    /// - `Err(AppError::NotFound)` - No player with that ID
    pub async fn get_by_id(&self, id: i64) -> Result<Player, AppError> {
        if id <= 0 {
            return Err(AppError::BadRequest("ID is not valid".to_string()));
        }

        let not_found = || AppError::NotFound(format!("Player {} not found", id));

        // IDs beyond the column range cannot exist
        let id = i32::try_from(id).map_err(|_| not_found())?;

        let repo = PlayerRepository::new(self.db);

        repo.find_by_id(id).await?.ok_or_else(not_found)
    }

    /// Applies a partial update to an existing player.
    ///
    /// Only supplied fields are written. A supplied experience is range checked and
    /// recomputes the leveling fields; without it the leveling fields stay as stored.
    ///
    /// # Returns
    /// - `Ok(Player)` - The player after the update
    /// - `Err(AppError::BadRequest)` - Invalid ID or a supplied value out of range
    /// - `Err(AppError::NotFound)` - No player with that ID
    pub async fn update(&self, id: i64, params: UpdatePlayerParams) -> Result<Player, AppError> {
        let existing = self.get_by_id(id).await?;

        if params.name.as_deref().is_some_and(|name| !is_valid_name(name)) {
            return Err(AppError::BadRequest("Name is not valid".to_string()));
        }
        if params.title.as_deref().is_some_and(|title| !is_valid_title(title)) {
            return Err(AppError::BadRequest("Title is not valid".to_string()));
        }
        if params.birthday.is_some_and(|birthday| !is_valid_birthday(&birthday)) {
            return Err(AppError::BadRequest("Birthday is not valid".to_string()));
        }

        let leveling = params
            .experience
            .map(|experience| {
                Leveling::from_experience(experience)
                    .ok_or_else(|| AppError::BadRequest("Experience is not valid".to_string()))
            })
            .transpose()?;

        let changes = PlayerChanges {
            name: params.name,
            title: params.title,
            race: params.race,
            profession: params.profession,
            birthday: params.birthday,
            banned: params.banned,
            leveling,
        };

        if changes.is_empty() {
            return Ok(existing);
        }

        let repo = PlayerRepository::new(self.db);
        let player = repo.update(existing.id, changes).await?;

        tracing::debug!("Updated player {}", player.id);

        Ok(player)
    }

    /// Deletes a player by ID.
    ///
    /// # Returns
    /// - `Ok(())` - The player was removed
    /// - `Err(AppError::BadRequest)` - ID is zero or negative
    /// - `Err(AppError::NotFound)` - No player with that ID
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let existing = self.get_by_id(id).await?;

        let repo = PlayerRepository::new(self.db);
        repo.delete(existing.id).await?;

        tracing::debug!("Deleted player {}", existing.id);

        Ok(())
    }
}

/// Name must not be blank and is limited to `MAX_NAME_LEN` characters.
fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty() && name.chars().count() <= MAX_NAME_LEN
}

fn is_valid_title(title: &str) -> bool {
    title.chars().count() <= MAX_TITLE_LEN
}

/// Birthdays before the Unix epoch are rejected.
fn is_valid_birthday(birthday: &DateTime<Utc>) -> bool {
    birthday.timestamp_millis() >= 0
}
