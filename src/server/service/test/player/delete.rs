use super::*;

/// Tests deleting an existing player.
///
/// Expected: Ok(()) and subsequent lookups return NotFound
#[tokio::test]
async fn deletes_existing_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::player::create_player(db).await?;
    let id: i64 = created.id.into();

    let service = PlayerService::new(db);
    service.delete(id).await?;

    assert!(matches!(service.get_by_id(id).await, Err(AppError::NotFound(_))));
    assert!(matches!(service.delete(id).await, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting with an invalid ID.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_non_positive_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlayerService::new(db);

    assert!(matches!(service.delete(0).await, Err(AppError::BadRequest(_))));
    assert!(matches!(service.delete(-5).await, Err(AppError::BadRequest(_))));

    Ok(())
}
