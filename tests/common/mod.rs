//! Common test utilities and fixtures
//!
//! Every test app uses a REAL SQLite file in a temporary directory with
//! migrations applied, so foreign keys and `ON DELETE SET NULL` behave as in
//! production.
#![allow(dead_code)]

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use openmusic_api::{DbPool, db};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

/// Router plus the pool behind it; the database is removed on drop.
pub struct TestApp {
    pub router: Router,
    pub pool: DbPool,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = db::create_pool(&db_url, 5, Duration::from_secs(5))
            .await
            .expect("Failed to create pool");
        db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            router: openmusic_api::router(pool.clone()),
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Send a request and return status plus parsed JSON body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// Create an album through the API and return its id.
    pub async fn create_album(&self, name: &str, year: i32) -> String {
        let (status, body) = self
            .post("/albums", json!({ "name": name, "year": year }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create album failed: {body}");
        body["data"]["albumId"].as_str().unwrap().to_string()
    }

    /// Create a song through the API and return its id.
    pub async fn create_song(&self, payload: Value) -> String {
        let (status, body) = self.post("/songs", payload).await;
        assert_eq!(status, StatusCode::CREATED, "create song failed: {body}");
        body["data"]["songId"].as_str().unwrap().to_string()
    }
}

/// Test fixtures
pub mod fixtures {
    use serde_json::{Value, json};

    pub fn song(title: &str, performer: &str) -> Value {
        json!({
            "title": title,
            "year": 1969,
            "genre": "Rock",
            "performer": performer
        })
    }

    pub fn song_in_album(title: &str, performer: &str, album_id: &str) -> Value {
        json!({
            "title": title,
            "year": 1969,
            "genre": "Rock",
            "performer": performer,
            "duration": 180,
            "albumId": album_id
        })
    }
}

/// Assert a `{status: "fail", message}` body and return the message.
pub fn fail_message(body: &Value) -> &str {
    assert_eq!(body["status"], "fail", "unexpected body: {body}");
    body["message"].as_str().expect("fail body without message")
}
