use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string_len(Player::Name, 12))
                    .col(string_len(Player::Title, 30))
                    .col(string(Player::Race))
                    .col(string(Player::Profession))
                    .col(timestamp_with_time_zone(Player::Birthday))
                    .col(integer(Player::Experience))
                    .col(integer(Player::Level))
                    .col(integer(Player::UntilNextLevel))
                    .col(boolean(Player::Banned).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_level")
                    .table(Player::Table)
                    .col(Player::Level)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Player {
    Table,
    Id,
    Name,
    Title,
    Race,
    Profession,
    Birthday,
    Experience,
    Level,
    UntilNextLevel,
    Banned,
}
