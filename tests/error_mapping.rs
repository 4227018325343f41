//! Error envelope integration tests
//!
//! Every failure, including ones raised outside the handlers, must reach the
//! client as `{status: "fail" | "error", message}`.
mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use common::{TestApp, fail_message, fixtures};
use openmusic_api::INTERNAL_ERROR_MESSAGE;
use serde_json::{Value, json};

fn assert_internal(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        &json!({ "status": "error", "message": INTERNAL_ERROR_MESSAGE })
    );
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["database"], "connected");
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/playlists").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(fail_message(&body), "Route not found");
}

#[tokio::test]
async fn test_method_not_allowed() {
    let app = TestApp::new().await;

    let (status, body) = app.request(Method::PATCH, "/albums/album-x", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(fail_message(&body), "Method Not Allowed");
}

#[tokio::test]
async fn test_malformed_json() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/albums")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": \"Abbey Road\","))
        .unwrap();

    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!fail_message(&body).is_empty());
}

#[tokio::test]
async fn test_missing_content_type() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/albums")
        .body(Body::from(r#"{"name":"Abbey Road","year":1969}"#))
        .unwrap();

    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn test_non_object_body() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/albums", json!(["Abbey Road", 1969])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn test_closed_pool_hides_database_error() {
    let app = TestApp::new().await;
    app.pool.close().await;

    let (status, body) = app.get("/albums/album-doesnotexist0000").await;
    assert_internal(status, &body);

    let (status, body) = app
        .post("/albums", json!({ "name": "Abbey Road", "year": 1969 }))
        .await;
    assert_internal(status, &body);

    let (status, body) = app.get("/health").await;
    assert_internal(status, &body);
}

#[tokio::test]
async fn test_missing_table_is_internal_error() {
    let app = TestApp::new().await;
    let album_id = app.create_album("Abbey Road", 1969).await;
    app.create_song(fixtures::song("Hey Jude", "The Beatles")).await;

    sqlx::query("DROP TABLE songs")
        .execute(&app.pool)
        .await
        .unwrap();

    let (status, body) = app.get("/songs").await;
    assert_internal(status, &body);

    // The album lookup succeeds but listing its songs does not
    let (status, body) = app.get(&format!("/albums/{album_id}")).await;
    assert_internal(status, &body);

    let (status, body) = app
        .post("/songs", fixtures::song("Let It Be", "The Beatles"))
        .await;
    assert_internal(status, &body);
}

#[tokio::test]
async fn test_validation_error_wins_over_database_state() {
    let app = TestApp::new().await;
    app.pool.close().await;

    let (status, body) = app.post("/albums", json!({ "year": 1969 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(fail_message(&body), "\"name\" is required");
}
