//! Common test utilities for integration tests
//!
//! Every test application runs against its own in-memory SQLite database,
//! so tests need no external services and stay isolated from each other.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use bmi_tracker_backend::{
    auth::CredentialScheme,
    config::{AppConfig, AuthConfig, DatabaseConfig, ServerConfig},
    routes,
    state::AppState,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    /// Create a new test application (plain credential scheme)
    pub async fn new() -> Self {
        Self::with_scheme(CredentialScheme::Plain).await
    }

    /// Create a test application running the argon2 credential scheme
    pub async fn with_argon2() -> Self {
        Self::with_scheme(CredentialScheme::Argon2).await
    }

    async fn with_scheme(scheme: CredentialScheme) -> Self {
        let pool = create_test_pool().await;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let state = AppState::new(pool.clone(), test_config(scheme));
        let app = routes::create_router(state);

        Self { app, pool }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Register an account and return the issued id
    pub async fn register(&self, name: &str, password: &str) -> i64 {
        let body = serde_json::json!({ "name": name, "password": password });
        let (status, response) = self.post("/api/v1/auth/register", &body.to_string()).await;
        assert_eq!(status, StatusCode::CREATED, "registration failed: {response}");

        let response: serde_json::Value = serde_json::from_str(&response).unwrap();
        response["account_id"].as_i64().expect("account_id in response")
    }
}

fn test_config(scheme: CredentialScheme) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        auth: AuthConfig {
            credential_scheme: scheme,
        },
    }
}

async fn create_test_pool() -> SqlitePool {
    // One connection: each connection to sqlite::memory: is its own database
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("in-memory url")
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database pool")
}
