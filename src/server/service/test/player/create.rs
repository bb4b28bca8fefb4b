use super::*;

/// Tests creating a player from complete params.
///
/// Verifies the assigned ID, the default for `banned` and the derived leveling fields.
///
/// Expected: Ok(Player) with level 1 and 200 experience to go
#[tokio::test]
async fn creates_player_with_derived_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlayerService::new(db);
    let player = service.create(valid_params()).await?;

    assert!(player.id > 0);
    assert_eq!(player.name, "Ragnar");
    assert_eq!(player.title, "Jarl of Kattegat");
    assert_eq!(player.race, Race::Human);
    assert_eq!(player.profession, Profession::Warrior);
    assert_eq!(player.birthday.timestamp_millis(), 1_262_304_000_000);
    assert_eq!(player.experience, 100);
    assert_eq!(player.level, 1);
    assert_eq!(player.until_next_level, 200);
    assert!(!player.banned);

    let stored = service.get_by_id(player.id.into()).await?;
    assert_eq!(stored, player);

    Ok(())
}

/// Tests that a supplied `banned` flag is kept.
///
/// Expected: Ok(Player) with `banned` set
#[tokio::test]
async fn keeps_supplied_banned_flag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlayerService::new(db);
    let player = service
        .create(CreatePlayerParams {
            banned: Some(true),
            ..valid_params()
        })
        .await?;

    assert!(player.banned);

    Ok(())
}

/// Tests creation with a blank name.
///
/// Expected: Err(AppError::BadRequest) for empty and whitespace-only names
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlayerService::new(db);

    for name in ["", "   "] {
        let result = service
            .create(CreatePlayerParams {
                name: Some(name.to_string()),
                ..valid_params()
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))), "name {:?}", name);
    }

    assert_eq!(service.count(&PlayerFilter::default()).await?, 0);

    Ok(())
}

/// Tests name and title length limits.
///
/// Expected: 12-char name and 30-char title accepted, one more character rejected
#[tokio::test]
async fn enforces_name_and_title_lengths() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlayerService::new(db);

    let accepted = service
        .create(CreatePlayerParams {
            name: Some("n".repeat(12)),
            title: Some("t".repeat(30)),
            ..valid_params()
        })
        .await;
    assert!(accepted.is_ok());

    let long_name = service
        .create(CreatePlayerParams {
            name: Some("n".repeat(13)),
            ..valid_params()
        })
        .await;
    assert!(matches!(long_name, Err(AppError::BadRequest(_))));

    let long_title = service
        .create(CreatePlayerParams {
            title: Some("t".repeat(31)),
            ..valid_params()
        })
        .await;
    assert!(matches!(long_title, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the experience range on creation.
///
/// Expected: 0 and 10_000_001 rejected, 1 and 10_000_000 accepted
#[tokio::test]
async fn enforces_experience_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlayerService::new(db);

    for experience in [0, -10, 10_000_001] {
        let result = service
            .create(CreatePlayerParams {
                experience: Some(experience),
                ..valid_params()
            })
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))), "xp {}", experience);
    }

    for experience in [1, 10_000_000] {
        let player = service
            .create(CreatePlayerParams {
                experience: Some(experience),
                ..valid_params()
            })
            .await?;
        assert_eq!(i64::from(player.experience), experience);
    }

    Ok(())
}

/// Tests creation with each required field missing in turn.
///
/// Expected: Err(AppError::BadRequest) every time
#[tokio::test]
async fn rejects_missing_required_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlayerService::new(db);
    let incomplete = [
        CreatePlayerParams {
            name: None,
            ..valid_params()
        },
        CreatePlayerParams {
            title: None,
            ..valid_params()
        },
        CreatePlayerParams {
            race: None,
            ..valid_params()
        },
        CreatePlayerParams {
            profession: None,
            ..valid_params()
        },
        CreatePlayerParams {
            birthday: None,
            ..valid_params()
        },
        CreatePlayerParams {
            experience: None,
            ..valid_params()
        },
    ];

    for params in incomplete {
        let result = service.create(params).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Tests creation with a birthday before the epoch.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_birthday_before_epoch() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlayerService::new(db);
    let result = service
        .create(CreatePlayerParams {
            birthday: DateTime::from_timestamp_millis(-1),
            ..valid_params()
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
