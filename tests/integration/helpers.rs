//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;

use reliefhub_api::{build_app, build_state};
use reliefhub_core::config::AppConfig;
use reliefhub_database::DatabasePool;

pub const ADMIN_EMAIL: &str = "admin@disaster.com";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const PASSWORD: &str = "Pw123!";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db: DatabasePool,
    /// Application config
    pub config: AppConfig,
}

/// How a request presents its session secret.
#[derive(Debug, Clone, Copy)]
pub enum Auth<'a> {
    None,
    Cookie(&'a str),
    Bearer(&'a str),
}

impl TestApp {
    /// Create a new test application over a fresh in-memory database
    pub async fn new() -> Self {
        Self::with_config(AppConfig::default()).await
    }

    pub async fn with_config(config: AppConfig) -> Self {
        let db = DatabasePool::in_memory()
            .await
            .expect("Failed to open in-memory database");
        let state = build_state(config.clone(), db.clone());
        let router = build_app(state);
        Self { router, db, config }
    }

    pub fn pool(&self) -> &SqlitePool {
        self.db.pool()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        auth: Auth<'_>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        req = match auth {
            Auth::None => req,
            Auth::Cookie(secret) => req.header(
                COOKIE,
                format!("{}={secret}", self.config.session.cookie_name),
            ),
            Auth::Bearer(secret) => req.header(AUTHORIZATION, format!("Bearer {secret}")),
        };

        let body = match body {
            Some(b) => {
                req = req.header(CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_string(&b).expect("Failed to serialize body"))
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(req.body(body).expect("Failed to build request"))
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, path: &str, secret: &str) -> TestResponse {
        self.request("GET", path, None, Auth::Cookie(secret)).await
    }

    pub async fn post(&self, path: &str, body: Value, secret: &str) -> TestResponse {
        self.request("POST", path, Some(body), Auth::Cookie(secret))
            .await
    }

    pub async fn patch(&self, path: &str, body: Value, secret: &str) -> TestResponse {
        self.request("PATCH", path, Some(body), Auth::Cookie(secret))
            .await
    }

    /// Sign up an account through the API
    pub async fn signup(&self, name: &str, email: &str, role: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/signup",
            Some(json!({
                "name": name,
                "email": email,
                "password": PASSWORD,
                "role": role,
            })),
            Auth::None,
        )
        .await
    }

    /// Login and return the session secret from the cookie
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(json!({ "email": email, "password": password })),
                Auth::None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .session_cookie(&self.config.session.cookie_name)
            .expect("No session cookie in login response")
    }

    pub async fn login_admin(&self) -> String {
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    /// Sign up and log in; returns `(user_id, secret)`
    pub async fn user(&self, email: &str, role: &str) -> (i64, String) {
        let response = self.signup(email, email, role).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Signup failed: {:?}",
            response.body
        );
        let id = response.body["user"]["id"].as_i64().expect("No user id");
        (id, self.login(email, PASSWORD).await)
    }

    /// File a report as the given citizen; returns its id
    pub async fn submit_report(&self, secret: &str, title: &str) -> i64 {
        let response = self
            .post(
                "/api/citizen/reports",
                json!({
                    "title": title,
                    "description": "Water rising fast",
                    "location": "Riverside",
                    "severity": "high",
                }),
                secret,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["report"]["id"].as_i64().expect("No report id")
    }

    /// Assign a volunteer as admin; returns the task id
    pub async fn assign(&self, admin: &str, report_id: i64, volunteer_id: i64) -> i64 {
        let response = self
            .post(
                &format!("/api/admin/reports/{report_id}/assign"),
                json!({ "volunteer_id": volunteer_id, "task_description": "clear debris" }),
                admin,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["task"]["id"].as_i64().expect("No task id")
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(self.pool())
            .await
            .expect("Count query failed")
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Value of the named cookie from `Set-Cookie`, if it was set.
    pub fn session_cookie(&self, name: &str) -> Option<String> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| k.trim() == name)
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn error(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
