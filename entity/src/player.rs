use sea_orm::entity::prelude::*;

/// Stored player record.
///
/// `race` and `profession` hold the enum tokens (e.g. `"HUMAN"`, `"WARRIOR"`) and are
/// parsed into domain enums at the repository boundary. `level` and `until_next_level`
/// are derived from `experience` and persisted so they can be filtered and sorted on.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub title: String,
    pub race: String,
    pub profession: String,
    pub birthday: DateTimeUtc,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
    pub banned: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
