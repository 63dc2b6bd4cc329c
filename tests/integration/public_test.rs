//! Integration tests for the unauthenticated feeds and alert issuing.

mod helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};

use helpers::{Auth, TestApp};

async fn public(app: &TestApp, path: &str) -> Value {
    let response = app.request("GET", path, None, Auth::None).await;
    assert_eq!(response.status, StatusCode::OK, "{path}: {:?}", response.body);
    response.body
}

#[tokio::test]
async fn test_public_disasters_lists_only_active_reports() {
    let app = TestApp::new().await;
    let (_, citizen) = app.user("c@x.com", "citizen").await;
    let admin = app.login_admin().await;
    let pending = app.submit_report(&citizen, "Pending").await;
    let working = app.submit_report(&citizen, "Working").await;
    let resolved = app.submit_report(&citizen, "Resolved").await;
    let acknowledged = app.submit_report(&citizen, "Acknowledged").await;
    for (id, status) in [
        (working, "in_progress"),
        (resolved, "resolved"),
        (acknowledged, "acknowledged"),
    ] {
        app.patch(
            &format!("/api/admin/reports/{id}/status"),
            json!({ "status": status }),
            &admin,
        )
        .await;
    }

    let body = public(&app, "/api/public/disasters").await;
    assert_eq!(body["total"], 2);
    let ids: Vec<i64> = body["disasters"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|d| d["id"].as_i64())
        .collect();
    assert!(ids.contains(&pending));
    assert!(ids.contains(&working));
}

#[tokio::test]
async fn test_alert_creation() {
    let app = TestApp::new().await;
    let (_, citizen) = app.user("c@x.com", "citizen").await;
    let admin = app.login_admin().await;
    let report_id = app.submit_report(&citizen, "Flood").await;

    let created = app
        .post(
            "/api/admin/alerts",
            json!({
                "title": "Evacuate",
                "message": "Move to higher ground",
                "alert_level": "critical",
                "report_id": report_id,
            }),
            &admin,
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["message"], "Alert created successfully");
    assert_eq!(created.body["alert"]["alert_level"], "critical");
    assert_eq!(created.body["alert"]["report_id"], report_id);
    assert_eq!(created.body["alert"]["is_broadcast"], true);

    let defaults = app
        .post(
            "/api/admin/alerts",
            json!({ "title": "Heads up", "message": "Roads icy" }),
            &admin,
        )
        .await;
    assert_eq!(defaults.status, StatusCode::CREATED);
    assert_eq!(defaults.body["alert"]["alert_level"], "info");
    assert!(defaults.body["alert"]["report_id"].is_null());

    let unknown_report = app
        .post(
            "/api/admin/alerts",
            json!({ "title": "X", "message": "Y", "report_id": 9999 }),
            &admin,
        )
        .await;
    assert_eq!(unknown_report.status, StatusCode::NOT_FOUND);

    let missing = app
        .post("/api/admin/alerts", json!({ "title": "X" }), &admin)
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);

    let forbidden = app
        .post(
            "/api/admin/alerts",
            json!({ "title": "X", "message": "Y" }),
            &citizen,
        )
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
    assert_eq!(app.count("alerts").await, 2);
}

#[tokio::test]
async fn test_alert_feeds_and_citizen_dashboard() {
    let app = TestApp::new().await;
    let (_, citizen) = app.user("c@x.com", "citizen").await;
    let admin = app.login_admin().await;
    for i in 0..3 {
        app.post(
            "/api/admin/alerts",
            json!({ "title": format!("Broadcast {i}"), "message": "m" }),
            &admin,
        )
        .await;
    }
    app.post(
        "/api/admin/alerts",
        json!({ "title": "Internal", "message": "m", "is_broadcast": false }),
        &admin,
    )
    .await;

    let feed = public(&app, "/api/public/alerts").await;
    assert_eq!(feed["total"], 3);
    assert_eq!(feed["alerts"][0]["title"], "Broadcast 2");

    let limited = public(&app, "/api/public/alerts?limit=2").await;
    assert_eq!(limited["total"], 2);

    let clamped = public(&app, "/api/public/alerts?limit=0").await;
    assert_eq!(clamped["total"], 1);

    let citizen_feed = app.get("/api/citizen/alerts", &citizen).await;
    assert_eq!(citizen_feed.status, StatusCode::OK);
    assert_eq!(citizen_feed.body["total"], 3);

    let admin_feed = app.get("/api/admin/alerts", &admin).await;
    assert_eq!(admin_feed.body["total"], 4);

    let dashboard = app.get("/api/citizen/dashboard", &citizen).await;
    let recent = dashboard.body["recent_alerts"].as_array().unwrap();
    assert_eq!(recent.len(), 4);
    assert_eq!(recent[0]["title"], "Internal");
}

#[tokio::test]
async fn test_public_resources_filter() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    for (name, kind) in [("Bottles", "water"), ("Tents", "shelter"), ("Tanks", "water")] {
        app.post(
            "/api/admin/resources",
            json!({ "name": name, "resource_type": kind, "quantity": 10 }),
            &admin,
        )
        .await;
    }
    let tanks = app.get("/api/admin/resources", &admin).await.body["resources"][2]["id"]
        .as_i64()
        .unwrap();
    app.patch(
        &format!("/api/admin/resources/{tanks}"),
        json!({ "availability": "exhausted" }),
        &admin,
    )
    .await;

    let all = public(&app, "/api/public/resources").await;
    assert_eq!(all["total"], 2);

    let water = public(&app, "/api/public/resources?type=water").await;
    assert_eq!(water["total"], 1);
    assert_eq!(water["resources"][0]["name"], "Bottles");

    let blank = public(&app, "/api/public/resources?type=").await;
    assert_eq!(blank["total"], 2);
}

#[tokio::test]
async fn test_public_statistics() {
    let app = TestApp::new().await;
    let (_, citizen) = app.user("c@x.com", "citizen").await;
    let admin = app.login_admin().await;
    app.submit_report(&citizen, "One").await;
    let resolved = app.submit_report(&citizen, "Two").await;
    let acknowledged = app.submit_report(&citizen, "Three").await;
    app.patch(
        &format!("/api/admin/reports/{resolved}/status"),
        json!({ "status": "resolved" }),
        &admin,
    )
    .await;
    app.patch(
        &format!("/api/admin/reports/{acknowledged}/status"),
        json!({ "status": "acknowledged" }),
        &admin,
    )
    .await;
    let created = app
        .post(
            "/api/admin/resources",
            json!({ "name": "Rice", "resource_type": "food", "quantity": 50 }),
            &admin,
        )
        .await;
    let rice = created.body["resource"]["id"].as_i64().unwrap();
    app.post(
        "/api/admin/resources",
        json!({ "name": "Beans", "resource_type": "food", "quantity": 20 }),
        &admin,
    )
    .await;
    app.patch(
        &format!("/api/admin/resources/{rice}"),
        json!({ "availability": "in_use" }),
        &admin,
    )
    .await;

    let stats = public(&app, "/api/public/statistics").await;
    assert_eq!(stats["disaster_stats"]["total_reports"], 3);
    assert_eq!(stats["disaster_stats"]["active_reports"], 1);
    assert_eq!(stats["disaster_stats"]["resolved_reports"], 1);
    assert_eq!(stats["resource_stats"]["total"], 2);
    assert_eq!(stats["resource_stats"]["available"], 1);
}
