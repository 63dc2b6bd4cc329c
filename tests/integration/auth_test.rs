//! Integration tests for signup, login, sessions and role gates.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{Auth, PASSWORD, TestApp};

#[tokio::test]
async fn test_signup_defaults_to_citizen_and_can_login() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({ "name": "A", "email": "a@x.com", "password": PASSWORD })),
            Auth::None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "User created successfully");
    assert_eq!(response.body["user"]["role"], "citizen");
    assert_eq!(response.body["user"]["is_active"], true);
    assert!(response.body["user"].get("password_hash").is_none());

    let secret = app.login("a@x.com", PASSWORD).await;
    let me = app.get("/api/auth/me", &secret).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["email"], "a@x.com");
}

#[tokio::test]
async fn test_signup_role_is_case_insensitive() {
    let app = TestApp::new().await;
    let response = app.signup("V", "v@x.com", "VOLUNTEER").await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["user"]["role"], "volunteer");
}

#[tokio::test]
async fn test_signup_accepts_admin_role_and_short_password() {
    let app = TestApp::new().await;
    let response = app.signup("M", "m@x.com", "admin").await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["user"]["role"], "admin");

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({ "name": "S", "email": "s@x.com", "password": "1" })),
            Auth::None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["user"]["role"], "citizen");

    let secret = app.login("s@x.com", "1").await;
    assert!(!secret.is_empty());
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let app = TestApp::new().await;
    assert_eq!(app.signup("A", "a@x.com", "citizen").await.status, StatusCode::CREATED);
    let users_before = app.count("users").await;

    let response = app.signup("A2", "A@X.com", "citizen").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(app.count("users").await, users_before);
}

#[tokio::test]
async fn test_signup_missing_fields_is_rejected() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({ "email": "a@x.com" })),
            Auth::None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!response.error().is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_a_400_with_error_body() {
    let app = TestApp::new().await;
    let response = app
        .request("POST", "/api/auth/login", None, Auth::None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!response.error().is_empty());
}

#[tokio::test]
async fn test_wrong_password_creates_no_session() {
    let app = TestApp::new().await;
    app.signup("A", "a@x.com", "citizen").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "a@x.com", "password": "nope-nope" })),
            Auth::None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.session_cookie("reliefhub_session").is_none());
    assert_eq!(app.count("sessions").await, 0);
}

#[tokio::test]
async fn test_unknown_email_is_unauthorized() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "ghost@x.com", "password": PASSWORD })),
            Auth::None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_inactive_account_is_forbidden() {
    let app = TestApp::new().await;
    app.signup("A", "a@x.com", "citizen").await;
    sqlx::query("UPDATE users SET is_active = 0 WHERE email = 'a@x.com'")
        .execute(app.pool())
        .await
        .unwrap();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "a@x.com", "password": PASSWORD })),
            Auth::None,
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_me_requires_session() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/auth/me", None, Auth::None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.get("/api/auth/me", "not-a-real-secret").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_bearer_token_is_accepted() {
    let app = TestApp::new().await;
    let (_, secret) = app.user("a@x.com", "citizen").await;
    let response = app
        .request("GET", "/api/auth/me", None, Auth::Bearer(&secret))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let app = TestApp::new().await;
    let (_, secret) = app.user("a@x.com", "citizen").await;

    let response = app
        .request("POST", "/api/auth/logout", None, Auth::Cookie(&secret))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Logged out successfully");

    let response = app.get("/api/auth/me", &secret).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deactivated_user_loses_existing_session() {
    let app = TestApp::new().await;
    let (id, secret) = app.user("a@x.com", "citizen").await;
    sqlx::query("UPDATE users SET is_active = 0 WHERE id = ?")
        .bind(id)
        .execute(app.pool())
        .await
        .unwrap();

    let response = app.get("/api/auth/me", &secret).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_role_gates() {
    let app = TestApp::new().await;
    let (_, citizen) = app.user("c@x.com", "citizen").await;
    let (_, volunteer) = app.user("v@x.com", "volunteer").await;
    let admin = app.login_admin().await;

    assert_eq!(
        app.get("/api/admin/dashboard", &citizen).await.status,
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        app.get("/api/admin/dashboard", &volunteer).await.status,
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        app.get("/api/volunteer/dashboard", &citizen).await.status,
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        app.get("/api/volunteer/dashboard", &admin).await.status,
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        app.request("GET", "/api/admin/dashboard", None, Auth::None)
            .await
            .status,
        StatusCode::UNAUTHORIZED
    );

    let response = app.get("/api/admin/dashboard", &admin).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["active_volunteers"], 1);

    let (retired, _) = app.user("r@x.com", "volunteer").await;
    sqlx::query("UPDATE users SET is_active = 0 WHERE id = ?")
        .bind(retired)
        .execute(app.pool())
        .await
        .unwrap();
    let response = app.get("/api/admin/dashboard", &admin).await;
    assert_eq!(response.body["active_volunteers"], 2);
}

#[tokio::test]
async fn test_role_gate_runs_before_input_parsing() {
    let app = TestApp::new().await;
    let (_, citizen) = app.user("c@x.com", "citizen").await;
    let (_, volunteer) = app.user("v@x.com", "volunteer").await;

    let bad_path = app
        .patch("/api/admin/reports/abc/status", json!({ "status": "resolved" }), &citizen)
        .await;
    assert_eq!(bad_path.status, StatusCode::FORBIDDEN);

    let bad_body = app
        .post("/api/admin/resources", json!({ "name": 5 }), &volunteer)
        .await;
    assert_eq!(bad_body.status, StatusCode::FORBIDDEN);
    assert_eq!(app.count("resources").await, 0);

    let bad_query = app.get("/api/admin/reports?page=minus-one", &citizen).await;
    assert_eq!(bad_query.status, StatusCode::FORBIDDEN);

    let bad_task = app
        .patch("/api/volunteer/tasks/xyz", json!({ "notes": 7 }), &citizen)
        .await;
    assert_eq!(bad_task.status, StatusCode::FORBIDDEN);

    let anonymous = app
        .request("PATCH", "/api/admin/reports/abc/status", Some(json!({})), Auth::None)
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_and_unknown_routes() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, Auth::None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");

    let response = app.request("GET", "/api/nowhere", None, Auth::None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error(), "Resource not found");
}
