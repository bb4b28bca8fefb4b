//! Player domain models and parameters.
//!
//! Provides the domain model for players, the closed race/profession/order vocabularies
//! with their token lookups, the leveling formula, and the parameter types flowing from
//! the controller into the service and from the service into the repository.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::player::{CreatePlayerDto, PlayerDto, UpdatePlayerDto},
    server::error::{token::UnknownToken, AppError},
};

/// Maximum name length in characters.
pub const MAX_NAME_LEN: usize = 12;
/// Maximum title length in characters.
pub const MAX_TITLE_LEN: usize = 30;
/// Largest accepted experience value; the smallest is 1.
pub const MAX_EXPERIENCE: i64 = 10_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

impl Race {
    pub const ALL: [Race; 7] = [
        Race::Human,
        Race::Dwarf,
        Race::Elf,
        Race::Giant,
        Race::Orc,
        Race::Troll,
        Race::Hobbit,
    ];

    /// Looks up a race by its case-sensitive token, e.g. `"HUMAN"`.
    pub fn from_token(token: &str) -> Result<Self, UnknownToken> {
        Self::ALL
            .into_iter()
            .find(|race| race.as_token() == token)
            .ok_or_else(|| UnknownToken {
                kind: "race",
                token: token.to_string(),
            })
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            Race::Human => "HUMAN",
            Race::Dwarf => "DWARF",
            Race::Elf => "ELF",
            Race::Giant => "GIANT",
            Race::Orc => "ORC",
            Race::Troll => "TROLL",
            Race::Hobbit => "HOBBIT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profession {
    Warrior,
    Rogue,
    Sorcerer,
    Cleric,
    Paladin,
    Nazgul,
    Warlock,
    Druid,
}

impl Profession {
    pub const ALL: [Profession; 8] = [
        Profession::Warrior,
        Profession::Rogue,
        Profession::Sorcerer,
        Profession::Cleric,
        Profession::Paladin,
        Profession::Nazgul,
        Profession::Warlock,
        Profession::Druid,
    ];

    /// Looks up a profession by its case-sensitive token, e.g. `"WARRIOR"`.
    pub fn from_token(token: &str) -> Result<Self, UnknownToken> {
        Self::ALL
            .into_iter()
            .find(|profession| profession.as_token() == token)
            .ok_or_else(|| UnknownToken {
                kind: "profession",
                token: token.to_string(),
            })
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            Profession::Warrior => "WARRIOR",
            Profession::Rogue => "ROGUE",
            Profession::Sorcerer => "SORCERER",
            Profession::Cleric => "CLERIC",
            Profession::Paladin => "PALADIN",
            Profession::Nazgul => "NAZGUL",
            Profession::Warlock => "WARLOCK",
            Profession::Druid => "DRUID",
        }
    }
}

/// Field a player listing is sorted by. Sorting is always ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerOrder {
    #[default]
    Id,
    Name,
    Experience,
    Birthday,
    Level,
}

impl PlayerOrder {
    pub const ALL: [PlayerOrder; 5] = [
        PlayerOrder::Id,
        PlayerOrder::Name,
        PlayerOrder::Experience,
        PlayerOrder::Birthday,
        PlayerOrder::Level,
    ];

    /// Looks up a sort order by its case-sensitive token, e.g. `"EXPERIENCE"`.
    pub fn from_token(token: &str) -> Result<Self, UnknownToken> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_token() == token)
            .ok_or_else(|| UnknownToken {
                kind: "order",
                token: token.to_string(),
            })
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            PlayerOrder::Id => "ID",
            PlayerOrder::Name => "NAME",
            PlayerOrder::Experience => "EXPERIENCE",
            PlayerOrder::Birthday => "BIRTHDAY",
            PlayerOrder::Level => "LEVEL",
        }
    }
}

/// Experience together with the level fields derived from it.
///
/// The only constructors derive `level` and `until_next_level` from `experience`, so a
/// `Leveling` value is always internally consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leveling {
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
}

impl Leveling {
    /// Validates an experience value and derives its level fields.
    ///
    /// # Returns
    /// - `Some(Leveling)` - Experience lies in `1..=MAX_EXPERIENCE`
    /// - `None` - Experience is zero, negative, or above the maximum
    pub fn from_experience(experience: i64) -> Option<Self> {
        if experience <= 0 || experience > MAX_EXPERIENCE {
            return None;
        }

        Some(Self::compute(experience as i32))
    }

    /// Derives the level fields for an experience value without range checks.
    ///
    /// The square root is truncated to an integer before the division by 100, and the
    /// division itself is integer division.
    pub fn compute(experience: i32) -> Self {
        let root = (2500.0 + 200.0 * f64::from(experience)).sqrt();
        let level = (root - 50.0) as i32 / 100;
        let until_next_level = 50 * (level + 1) * (level + 2) - experience;

        Self {
            experience,
            level,
            until_next_level,
        }
    }
}

/// Player domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: DateTime<Utc>,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
    pub banned: bool,
}

impl Player {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Player)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored race or profession token is not recognized
    pub fn from_entity(entity: entity::player::Model) -> Result<Self, DbErr> {
        let race = Race::from_token(&entity.race)
            .map_err(|e| DbErr::Custom(format!("Failed to parse race: {}", e)))?;
        let profession = Profession::from_token(&entity.profession)
            .map_err(|e| DbErr::Custom(format!("Failed to parse profession: {}", e)))?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            title: entity.title,
            race,
            profession,
            birthday: entity.birthday,
            experience: entity.experience,
            level: entity.level,
            until_next_level: entity.until_next_level,
            banned: entity.banned,
        })
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            name: self.name,
            title: self.title,
            race: self.race.as_token().to_string(),
            profession: self.profession.as_token().to_string(),
            birthday: self.birthday.timestamp_millis(),
            banned: self.banned,
            experience: self.experience,
            level: self.level,
            until_next_level: self.until_next_level,
        }
    }
}

/// Converts epoch milliseconds from a request into a UTC timestamp.
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Timestamp within chrono's supported range
/// - `Err(AppError::BadRequest)` - Timestamp out of range
pub fn parse_millis(millis: i64) -> Result<DateTime<Utc>, AppError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| AppError::BadRequest(format!("Timestamp {} is out of range", millis)))
}

fn parse_race(token: Option<String>) -> Result<Option<Race>, UnknownToken> {
    token.as_deref().map(Race::from_token).transpose()
}

fn parse_profession(token: Option<String>) -> Result<Option<Profession>, UnknownToken> {
    token.as_deref().map(Profession::from_token).transpose()
}

/// Raw creation input after enum and timestamp conversion, before validation.
///
/// Presence and range checks happen in the service layer, which turns this into a
/// `NewPlayer`.
#[derive(Debug, Clone, Default)]
pub struct CreatePlayerParams {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub birthday: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub experience: Option<i64>,
}

impl CreatePlayerParams {
    /// Converts a creation DTO, resolving enum tokens and timestamps.
    ///
    /// # Returns
    /// - `Ok(CreatePlayerParams)` - Converted params, fields may still be missing
    /// - `Err(AppError::TokenErr)` - Unknown race or profession token
    /// - `Err(AppError::BadRequest)` - Birthday outside the representable range
    pub fn from_dto(dto: CreatePlayerDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto.name,
            title: dto.title,
            race: parse_race(dto.race)?,
            profession: parse_profession(dto.profession)?,
            birthday: dto.birthday.map(parse_millis).transpose()?,
            banned: dto.banned,
            experience: dto.experience,
        })
    }
}

/// Validated player ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: DateTime<Utc>,
    pub leveling: Leveling,
    pub banned: bool,
}

/// Partial update input. `None` means the field was absent and is left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlayerParams {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub birthday: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub experience: Option<i64>,
}

impl UpdatePlayerParams {
    /// Converts an update DTO, resolving enum tokens and timestamps.
    pub fn from_dto(dto: UpdatePlayerDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto.name,
            title: dto.title,
            race: parse_race(dto.race)?,
            profession: parse_profession(dto.profession)?,
            birthday: dto.birthday.map(parse_millis).transpose()?,
            banned: dto.banned,
            experience: dto.experience,
        })
    }
}

/// Validated set of column changes for an existing player.
///
/// Experience only travels together with its derived level fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerChanges {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub birthday: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub leveling: Option<Leveling>,
}

impl PlayerChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Page, page size and sort order for a player listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub order: PlayerOrder,
    /// Zero-based page number
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    /// Builds a page request from raw query values.
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Valid order token, `page_number >= 0`, `page_size >= 1`
    /// - `Err(AppError::TokenErr)` - Unknown order token
    /// - `Err(AppError::BadRequest)` - Negative page number, non-positive page size, or a
    ///   row offset (`page_number * page_size`) beyond what the database can address
    pub fn from_query(order: &str, page_number: i64, page_size: i64) -> Result<Self, AppError> {
        let order = PlayerOrder::from_token(order)?;

        let page = u64::try_from(page_number)
            .map_err(|_| AppError::BadRequest("Page number must not be negative".to_string()))?;

        let per_page = u64::try_from(page_size)
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| AppError::BadRequest("Page size must be positive".to_string()))?;

        // SQLite takes LIMIT/OFFSET as signed 64-bit
        page
            .checked_mul(per_page)
            .filter(|offset| i64::try_from(*offset).is_ok())
            .ok_or_else(|| AppError::BadRequest("Page is out of range".to_string()))?;

        Ok(Self {
            order,
            page,
            per_page,
        })
    }
}
