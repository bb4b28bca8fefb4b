//! Player filter criteria and their composition into a predicate.
//!
//! `PlayerFilter` holds the optional criteria from a list or count request.
//! `PlayerFilter::conditions` turns the criteria that are set into a flat list of
//! `PlayerCondition`s that are ANDed together. The list does not depend on SeaORM; the
//! repository lowers it into a query condition. An empty list matches every player.

use chrono::{DateTime, Utc};

use crate::{
    model::player::PlayerFilterQuery,
    server::{
        error::AppError,
        model::player::{parse_millis, Profession, Race},
    },
};

/// Inclusive range where either end may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Bounds<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    /// True when neither end is set, i.e. the range constrains nothing.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

/// A single constraint on a player.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCondition {
    /// Case-sensitive substring of the name
    NameContains(String),
    /// Substring of the title
    TitleContains(String),
    RaceIs(Race),
    ProfessionIs(Profession),
    BirthdayWithin(Bounds<DateTime<Utc>>),
    BannedIs(bool),
    ExperienceWithin(Bounds<i64>),
    LevelWithin(Bounds<i64>),
}

/// Optional criteria for listing and counting players.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerFilter {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub birthday: Bounds<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub experience: Bounds<i64>,
    pub level: Bounds<i64>,
}

impl PlayerFilter {
    /// Converts query parameters into filter criteria.
    ///
    /// # Returns
    /// - `Ok(PlayerFilter)` - Criteria with enum tokens and timestamps resolved
    /// - `Err(AppError::TokenErr)` - Unknown race or profession token
    /// - `Err(AppError::BadRequest)` - `after`/`before` outside the representable range
    pub fn from_query(query: PlayerFilterQuery) -> Result<Self, AppError> {
        Ok(Self {
            name: query.name,
            title: query.title,
            race: query.race.as_deref().map(Race::from_token).transpose()?,
            profession: query
                .profession
                .as_deref()
                .map(Profession::from_token)
                .transpose()?,
            birthday: Bounds::new(
                query.after.map(parse_millis).transpose()?,
                query.before.map(parse_millis).transpose()?,
            ),
            banned: query.banned,
            experience: Bounds::new(query.min_experience, query.max_experience),
            level: Bounds::new(query.min_level, query.max_level),
        })
    }

    /// Composes the set criteria into conditions to be ANDed together.
    ///
    /// Unset criteria, empty name/title strings and fully open ranges contribute nothing.
    pub fn conditions(&self) -> Vec<PlayerCondition> {
        let mut conditions = Vec::new();

        if let Some(name) = self.name.as_ref().filter(|name| !name.is_empty()) {
            conditions.push(PlayerCondition::NameContains(name.clone()));
        }
        if let Some(title) = self.title.as_ref().filter(|title| !title.is_empty()) {
            conditions.push(PlayerCondition::TitleContains(title.clone()));
        }
        if let Some(race) = self.race {
            conditions.push(PlayerCondition::RaceIs(race));
        }
        if let Some(profession) = self.profession {
            conditions.push(PlayerCondition::ProfessionIs(profession));
        }
        if !self.birthday.is_unbounded() {
            conditions.push(PlayerCondition::BirthdayWithin(self.birthday));
        }
        if let Some(banned) = self.banned {
            conditions.push(PlayerCondition::BannedIs(banned));
        }
        if !self.experience.is_unbounded() {
            conditions.push(PlayerCondition::ExperienceWithin(self.experience));
        }
        if !self.level.is_unbounded() {
            conditions.push(PlayerCondition::LevelWithin(self.level));
        }

        conditions
    }
}
