/// Shared test infrastructure
///
/// `TestContext` builds the full router in-process against a fresh, empty
/// database, so every test starts from a clean slate with no external
/// services.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use taskboard_api::app::{build_router, AppState};
use taskboard_api::config::Config;
use taskboard_core::db::Database;
use taskboard_core::dispatch::MediatorBuilder;
use taskboard_core::features;
use tower::Service as _;

/// In-process application under test
pub struct TestContext {
    /// The router, ready to be called as a tower service
    pub app: Router,
}

impl TestContext {
    /// Builds the app with a fresh database and all features registered.
    pub fn new() -> Self {
        let db = Arc::new(Database::new());
        let mediator = features::register_all(MediatorBuilder::new(), &db).build();
        let state = AppState::new(mediator, Config::default());

        Self {
            app: build_router(state),
        }
    }

    /// Sends a POST with a JSON body, returning status and parsed body.
    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Sends a GET, returning status and parsed body.
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().call(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    /// Registers a user and returns its ID.
    pub async fn register_user(&self, username: &str) -> i64 {
        let (status, body) = self
            .post_json("/api/users", serde_json::json!({ "username": username }))
            .await;
        assert_eq!(status, StatusCode::OK, "user registration failed: {body}");
        body["id"].as_i64().unwrap()
    }

    /// Creates a task and returns its ID.
    pub async fn create_task(&self, title: &str, user_id: i64) -> i64 {
        let (status, body) = self
            .post_json(
                "/api/tasks",
                serde_json::json!({ "title": title, "userId": user_id }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "task creation failed: {body}");
        body["id"].as_i64().unwrap()
    }
}
