use super::*;

async fn seed(db: &DatabaseConnection) {
    let players = [
        ("Aragorn", "ELF", 5000, false),
        ("Boromir", "HUMAN", 300, true),
        ("Celeborn", "ELF", 100, false),
        ("Denethor", "HUMAN", 2000, false),
        ("Elrond", "ELF", 800, false),
    ];

    for (name, race, experience, banned) in players {
        factory::player::PlayerFactory::new(db)
            .name(name)
            .race(race)
            .experience(experience)
            .banned(banned)
            .build()
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn defaults_to_first_three_by_id() {
    let (_test, db) = setup().await;
    seed(&db).await;

    let (status, body) = get(&db, "/rest/players").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Aragorn", "Boromir", "Celeborn"]);
}

#[tokio::test]
async fn applies_filters_order_and_paging() {
    let (_test, db) = setup().await;
    seed(&db).await;

    let (status, body) = get(
        &db,
        "/rest/players?race=ELF&order=EXPERIENCE&pageNumber=0&pageSize=2",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Celeborn", "Elrond"]);

    let (_, body) = get(
        &db,
        "/rest/players?race=ELF&order=EXPERIENCE&pageNumber=1&pageSize=2",
    )
    .await;
    assert_eq!(names(&body), vec!["Aragorn"]);

    let (_, body) = get(
        &db,
        "/rest/players?banned=false&minExperience=800&maxExperience=5000",
    )
    .await;
    assert_eq!(names(&body), vec!["Aragorn", "Denethor", "Elrond"]);

    let (_, body) = get(&db, "/rest/players?name=or&order=NAME&pageSize=10").await;
    assert_eq!(names(&body), vec!["Aragorn", "Boromir", "Celeborn", "Denethor"]);
}

#[tokio::test]
async fn rejects_invalid_page_parameters() {
    let (_test, db) = setup().await;

    for uri in [
        "/rest/players?pageNumber=-1",
        "/rest/players?pageSize=0",
        "/rest/players?order=AGE",
        "/rest/players?race=elf",
        "/rest/players?pageNumber=4294967296&pageSize=4294967296",
        "/rest/players?pageNumber=9223372036854775807&pageSize=2",
    ] {
        let (status, body) = get(&db, uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(body["error"].is_string());
    }
}
