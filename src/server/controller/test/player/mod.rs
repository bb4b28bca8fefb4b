use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};

mod list;
mod update;

async fn setup() -> (TestContext, DatabaseConnection) {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    (test, db)
}

fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState::new(db.clone()))
}

/// Sends a request through the router and returns the status with the JSON body, or
/// `Value::Null` when the body is empty.
async fn send(
    db: &DatabaseConnection,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app(db).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

async fn get(db: &DatabaseConnection, uri: &str) -> (StatusCode, Value) {
    send(db, Method::GET, uri, None).await
}

async fn post(db: &DatabaseConnection, uri: &str, body: Value) -> (StatusCode, Value) {
    send(db, Method::POST, uri, Some(body)).await
}

fn valid_payload() -> Value {
    json!({
        "name": "Ragnar",
        "title": "Jarl of Kattegat",
        "race": "HUMAN",
        "profession": "WARRIOR",
        "birthday": 1_262_304_000_000_i64,
        "experience": 100
    })
}

fn names(players: &Value) -> Vec<&str> {
    players
        .as_array()
        .unwrap()
        .iter()
        .map(|player| player["name"].as_str().unwrap())
        .collect()
}
