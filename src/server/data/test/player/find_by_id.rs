use super::*;

/// Tests finding an existing player.
///
/// Expected: Ok(Some(Player))
#[tokio::test]
async fn finds_existing_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::player::PlayerFactory::new(db)
        .name("Камираж")
        .race("ELF")
        .profession("SORCERER")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let player = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(player.id, created.id);
    assert_eq!(player.name, "Камираж");
    assert_eq!(player.race, Race::Elf);
    assert_eq!(player.profession, Profession::Sorcerer);

    Ok(())
}

/// Tests finding a nonexistent player.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let result = repo.find_by_id(999999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests reading a row whose race token is not recognized.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_corrupt_race_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::player::PlayerFactory::new(db)
        .race("DRAGON")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let result = repo.find_by_id(created.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
