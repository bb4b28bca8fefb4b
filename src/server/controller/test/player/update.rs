use super::*;

#[tokio::test]
async fn ban_only_update_keeps_other_fields() {
    let (_test, db) = setup().await;
    let (_, created) = post(&db, "/rest/players", valid_payload()).await;
    let uri = format!("/rest/players/{}", created["id"]);

    let (status, updated) = post(&db, &uri, json!({ "banned": true })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["banned"], true);

    let mut expected = created.clone();
    expected["banned"] = json!(true);
    assert_eq!(updated, expected);
}

#[tokio::test]
async fn experience_update_recomputes_level() {
    let (_test, db) = setup().await;
    let (_, created) = post(&db, "/rest/players", valid_payload()).await;
    let uri = format!("/rest/players/{}", created["id"]);

    let (status, updated) = post(&db, &uri, json!({ "experience": 299 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["level"], 1);
    assert_eq!(updated["untilNextLevel"], 1);

    let (_, fetched) = get(&db, &uri).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn rejects_invalid_update_values() {
    let (_test, db) = setup().await;
    let (_, created) = post(&db, "/rest/players", valid_payload()).await;
    let uri = format!("/rest/players/{}", created["id"]);

    for payload in [
        json!({ "experience": 10_000_001 }),
        json!({ "birthday": -1 }),
        json!({ "profession": "BARD" }),
    ] {
        let (status, _) = post(&db, &uri, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (status, _) = post(&db, "/rest/players/999999", json!({ "banned": true })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = post(&db, "/rest/players/0", json!({ "banned": true })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rejects_wrongly_typed_update_field() {
    let (_test, db) = setup().await;
    let (_, created) = post(&db, "/rest/players", valid_payload()).await;
    let uri = format!("/rest/players/{}", created["id"]);

    let (status, body) = post(&db, &uri, json!({ "banned": "yes" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, fetched) = get(&db, &uri).await;
    assert_eq!(fetched, created);
}
