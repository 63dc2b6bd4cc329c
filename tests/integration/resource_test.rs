//! Integration tests for the admin resource registry.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{Auth, TestApp};

fn blankets() -> serde_json::Value {
    json!({
        "name": "Blankets",
        "resource_type": "shelter",
        "quantity": 40,
        "unit": "pieces",
        "location": "Gym",
        "contact_person": "Lee",
        "contact_phone": "555-0100",
    })
}

#[tokio::test]
async fn test_create_then_get_returns_same_fields() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;

    let created = app.post("/api/admin/resources", blankets(), &admin).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["message"], "Resource created successfully");
    let resource = created.body["resource"].clone();
    assert_eq!(resource["availability"], "available");
    assert_eq!(resource["quantity"], 40);

    let id = resource["id"].as_i64().unwrap();
    let fetched = app.get(&format!("/api/admin/resources/{id}"), &admin).await;
    assert_eq!(fetched.status, StatusCode::OK);
    for field in [
        "name",
        "resource_type",
        "quantity",
        "unit",
        "location",
        "availability",
        "contact_person",
        "contact_phone",
    ] {
        assert_eq!(fetched.body[field], resource[field], "field {field}");
    }
}

#[tokio::test]
async fn test_padded_name_and_type_round_trip() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;

    let mut body = blankets();
    body["name"] = json!(" Blankets  ");
    body["resource_type"] = json!(" shelter");
    let created = app.post("/api/admin/resources", body, &admin).await;
    assert_eq!(created.status, StatusCode::CREATED);

    let id = created.body["resource"]["id"].as_i64().unwrap();
    let fetched = app.get(&format!("/api/admin/resources/{id}"), &admin).await;
    assert_eq!(fetched.body["name"], " Blankets  ");
    assert_eq!(fetched.body["resource_type"], " shelter");
}

#[tokio::test]
async fn test_create_validation() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;

    let negative = app
        .post(
            "/api/admin/resources",
            json!({ "name": "Water", "resource_type": "water", "quantity": -5 }),
            &admin,
        )
        .await;
    assert_eq!(negative.status, StatusCode::BAD_REQUEST);
    assert_eq!(negative.error(), "Quantity cannot be negative");

    let missing = app
        .post("/api/admin/resources", json!({ "quantity": 3 }), &admin)
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.error(), "Missing required fields");

    let defaulted = app
        .post(
            "/api/admin/resources",
            json!({ "name": "Tents", "resource_type": "shelter" }),
            &admin,
        )
        .await;
    assert_eq!(defaulted.status, StatusCode::CREATED);
    assert_eq!(defaulted.body["resource"]["quantity"], 0);
    assert_eq!(app.count("resources").await, 1);
}

#[tokio::test]
async fn test_update_merges_fields() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    let created = app.post("/api/admin/resources", blankets(), &admin).await;
    let id = created.body["resource"]["id"].as_i64().unwrap();
    let path = format!("/api/admin/resources/{id}");

    let updated = app
        .patch(&path, json!({ "availability": "IN_USE", "quantity": 12 }), &admin)
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["availability"], "in_use");
    assert_eq!(updated.body["quantity"], 12);
    assert_eq!(updated.body["name"], "Blankets");

    let invalid = app
        .patch(&path, json!({ "availability": "lost" }), &admin)
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);

    let negative = app.patch(&path, json!({ "quantity": -1 }), &admin).await;
    assert_eq!(negative.status, StatusCode::BAD_REQUEST);

    let blank = app.patch(&path, json!({ "name": "  " }), &admin).await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);

    let unchanged = app.get(&path, &admin).await;
    assert_eq!(unchanged.body["availability"], "in_use");
    assert_eq!(unchanged.body["quantity"], 12);
}

#[tokio::test]
async fn test_delete_then_not_found() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    let created = app.post("/api/admin/resources", blankets(), &admin).await;
    let id = created.body["resource"]["id"].as_i64().unwrap();
    let path = format!("/api/admin/resources/{id}");

    let deleted = app.request("DELETE", &path, None, Auth::Cookie(&admin)).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Resource deleted");

    assert_eq!(app.get(&path, &admin).await.status, StatusCode::NOT_FOUND);
    let again = app.request("DELETE", &path, None, Auth::Cookie(&admin)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(
        app.patch(&path, json!({ "quantity": 1 }), &admin).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_registry_is_admin_only() {
    let app = TestApp::new().await;
    let (_, citizen) = app.user("c@x.com", "citizen").await;
    let (_, volunteer) = app.user("v@x.com", "volunteer").await;

    for secret in [&citizen, &volunteer] {
        assert_eq!(
            app.get("/api/admin/resources", secret).await.status,
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            app.post("/api/admin/resources", blankets(), secret)
                .await
                .status,
            StatusCode::FORBIDDEN
        );
    }
    let anonymous = app
        .request("GET", "/api/admin/resources", None, Auth::None)
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.count("resources").await, 0);
}

#[tokio::test]
async fn test_list_counts_every_resource() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    app.post("/api/admin/resources", blankets(), &admin).await;
    app.post(
        "/api/admin/resources",
        json!({ "name": "Water", "resource_type": "water", "quantity": 100 }),
        &admin,
    )
    .await;

    let list = app.get("/api/admin/resources", &admin).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body["total"], 2);
    assert_eq!(list.body["resources"][0]["name"], "Blankets");
}
