use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Player as returned by the API.
///
/// `birthday` is milliseconds since the Unix epoch. `race` and `profession` are enum
/// tokens such as `"HUMAN"` or `"WARRIOR"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub race: String,
    pub profession: String,
    pub birthday: i64,
    pub banned: bool,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
}

/// Payload for creating a player.
///
/// Every field is optional at the wire level so that missing values surface as a
/// 400 from validation rather than as a deserialization failure. Client supplied `id`,
/// `level` and `untilNextLevel` are not part of the payload and are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerDto {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<String>,
    pub profession: Option<String>,
    pub birthday: Option<i64>,
    pub banned: Option<bool>,
    pub experience: Option<i64>,
}

/// Payload for a partial player update. Absent or `null` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerDto {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<String>,
    pub profession: Option<String>,
    pub birthday: Option<i64>,
    pub banned: Option<bool>,
    pub experience: Option<i64>,
}

/// Filter criteria shared by the list and count endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PlayerFilterQuery {
    /// Case-sensitive substring of the player name
    pub name: Option<String>,
    /// Substring of the player title
    pub title: Option<String>,
    /// Race token, e.g. `HUMAN`
    pub race: Option<String>,
    /// Profession token, e.g. `WARRIOR`
    pub profession: Option<String>,
    /// Earliest birthday (inclusive), epoch milliseconds
    pub after: Option<i64>,
    /// Latest birthday (inclusive), epoch milliseconds
    pub before: Option<i64>,
    pub banned: Option<bool>,
    pub min_experience: Option<i64>,
    pub max_experience: Option<i64>,
    pub min_level: Option<i64>,
    pub max_level: Option<i64>,
}
