//! Common test utilities for integration tests
//!
//! This module provides shared setup and teardown for integration tests.
//! Tests using it need a reachable MySQL instance; point `TEST_DB_*` at it
//! or rely on the localhost defaults.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use bmi_tracker_backend::{config::AppConfig, routes, state::AppState};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub pool: MySqlPool,
}

impl TestApp {
    /// Create a new test application with a real database
    ///
    /// Both tables are truncated so every test starts from an empty store.
    pub async fn new() -> Self {
        let config = test_config();

        let pool = MySqlPoolOptions::new()
            .max_connections(2)
            .connect(&config.database_url())
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        for table in ["weights", "meal_checklist"] {
            sqlx::query(&format!("TRUNCATE TABLE {table}"))
                .execute(&pool)
                .await
                .expect("Failed to truncate table");
        }

        let state = AppState::new(pool.clone(), config);
        let app = routes::create_router(state);

        Self { app, pool }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.request("GET", path, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.request("POST", path, Some(body)).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> (StatusCode, String) {
        self.request("DELETE", path, None).await
    }

    async fn request(&self, method: &str, path: &str, body: Option<&str>) -> (StatusCode, String) {
        use tower::ServiceExt;

        let mut builder = Request::builder().method(method).uri(path);
        let body = match body {
            Some(json) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }
}

/// Build the test configuration from `TEST_DB_*` variables with localhost
/// fallbacks
fn test_config() -> AppConfig {
    AppConfig {
        db_user: std::env::var("TEST_DB_USER").unwrap_or_else(|_| "root".to_string()),
        db_pass: std::env::var("TEST_DB_PASS").unwrap_or_else(|_| "root".to_string()),
        db_host: std::env::var("TEST_DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
        db_name: std::env::var("TEST_DB_NAME").unwrap_or_else(|_| "bmi_tracker_test".to_string()),
        max_connections: 2,
        ..Default::default()
    }
}
