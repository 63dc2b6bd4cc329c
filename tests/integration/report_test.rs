//! Integration tests for the report lifecycle.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_submit_report_starts_pending() {
    let app = TestApp::new().await;
    let (citizen_id, secret) = app.user("c@x.com", "citizen").await;

    let response = app
        .post(
            "/api/citizen/reports",
            json!({
                "title": "Flood",
                "description": "Street under water",
                "location": "Main St",
                "latitude": 12.5,
                "longitude": 77.1,
            }),
            &secret,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Report submitted successfully");
    let report = &response.body["report"];
    assert_eq!(report["status"], "pending");
    assert_eq!(report["severity"], "medium");
    assert_eq!(report["reporter"]["id"], citizen_id);
    assert!(report["resolved_at"].is_null());
}

#[tokio::test]
async fn test_submit_report_validation() {
    let app = TestApp::new().await;
    let (_, secret) = app.user("c@x.com", "citizen").await;

    let missing = app
        .post("/api/citizen/reports", json!({ "title": "Flood" }), &secret)
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);

    let bad_severity = app
        .post(
            "/api/citizen/reports",
            json!({ "title": "F", "description": "d", "location": "l", "severity": "apocalyptic" }),
            &secret,
        )
        .await;
    assert_eq!(bad_severity.status, StatusCode::BAD_REQUEST);

    let bad_latitude = app
        .post(
            "/api/citizen/reports",
            json!({ "title": "F", "description": "d", "location": "l", "latitude": 120.0 }),
            &secret,
        )
        .await;
    assert_eq!(bad_latitude.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.count("disaster_reports").await, 0);
}

#[tokio::test]
async fn test_citizen_cannot_read_others_report() {
    let app = TestApp::new().await;
    let (_, owner) = app.user("owner@x.com", "citizen").await;
    let (_, other) = app.user("other@x.com", "citizen").await;
    let id = app.submit_report(&owner, "Fire").await;

    let path = format!("/api/citizen/reports/{id}");
    assert_eq!(app.get(&path, &owner).await.status, StatusCode::OK);
    assert_eq!(app.get(&path, &other).await.status, StatusCode::FORBIDDEN);
    assert_eq!(
        app.get(&format!("{path}/status"), &other).await.status,
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        app.patch(&path, json!({ "title": "Mine now" }), &other)
            .await
            .status,
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        app.get("/api/citizen/reports/9999", &other).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_citizen_updates_own_report() {
    let app = TestApp::new().await;
    let (_, secret) = app.user("c@x.com", "citizen").await;
    let id = app.submit_report(&secret, "Flood").await;

    let response = app
        .patch(
            &format!("/api/citizen/reports/{id}"),
            json!({ "title": "Big flood", "severity": "CRITICAL" }),
            &secret,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Big flood");
    assert_eq!(response.body["severity"], "critical");
    assert_eq!(response.body["description"], "Water rising fast");
}

#[tokio::test]
async fn test_citizen_report_list_is_paginated() {
    let app = TestApp::new().await;
    let (_, secret) = app.user("c@x.com", "citizen").await;
    let (_, other) = app.user("o@x.com", "citizen").await;
    for i in 0..3 {
        app.submit_report(&secret, &format!("Report {i}")).await;
    }
    app.submit_report(&other, "Not mine").await;

    let response = app
        .get("/api/citizen/reports?page=1&per_page=2", &secret)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 3);
    assert_eq!(response.body["pages"], 2);
    assert_eq!(response.body["current_page"], 1);
    let reports = response.body["reports"].as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["title"], "Report 2");
}

#[tokio::test]
async fn test_out_of_range_page_is_empty() {
    let app = TestApp::new().await;
    let (_, secret) = app.user("c@x.com", "citizen").await;
    app.submit_report(&secret, "Only one").await;
    let admin = app.login_admin().await;

    for path in [
        "/api/citizen/reports?page=18446744073709551615",
        "/api/admin/reports?page=18446744073709551615&per_page=100",
    ] {
        let secret = if path.starts_with("/api/admin") { &admin } else { &secret };
        let response = app.get(path, secret).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert_eq!(response.body["total"], 1);
        assert_eq!(response.body["current_page"], u64::MAX);
        assert!(response.body["reports"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_admin_status_changes_and_resolution_stamp() {
    let app = TestApp::new().await;
    let (_, citizen) = app.user("c@x.com", "citizen").await;
    let admin = app.login_admin().await;
    let id = app.submit_report(&citizen, "Landslide").await;
    let path = format!("/api/admin/reports/{id}/status");

    let missing = app.patch(&path, json!({}), &admin).await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.error(), "Status field required");

    let invalid = app.patch(&path, json!({ "status": "done" }), &admin).await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);

    let resolved = app
        .patch(&path, json!({ "status": "RESOLVED" }), &admin)
        .await;
    assert_eq!(resolved.status, StatusCode::OK);
    assert_eq!(resolved.body["status"], "resolved");
    let stamp = resolved.body["resolved_at"].clone();
    assert!(stamp.is_string());

    // Any status may follow any other.
    let reopened = app
        .patch(&path, json!({ "status": "pending" }), &admin)
        .await;
    assert_eq!(reopened.body["status"], "pending");
    let again = app
        .patch(&path, json!({ "status": "resolved" }), &admin)
        .await;
    assert_eq!(again.body["resolved_at"], stamp);

    let unknown = app
        .patch("/api/admin/reports/9999/status", json!({ "status": "pending" }), &admin)
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_list_filters_by_status_and_embeds_tasks() {
    let app = TestApp::new().await;
    let (_, citizen) = app.user("c@x.com", "citizen").await;
    let (volunteer_id, _) = app.user("v@x.com", "volunteer").await;
    let admin = app.login_admin().await;
    let first = app.submit_report(&citizen, "First").await;
    let second = app.submit_report(&citizen, "Second").await;
    app.assign(&admin, first, volunteer_id).await;
    app.patch(
        &format!("/api/admin/reports/{second}/status"),
        json!({ "status": "acknowledged" }),
        &admin,
    )
    .await;

    let all = app.get("/api/admin/reports", &admin).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body["total"], 2);
    let reports = all.body["reports"].as_array().unwrap();
    assert_eq!(reports[0]["id"], second);
    assert_eq!(reports[1]["volunteer_tasks"].as_array().unwrap().len(), 1);

    let pending = app.get("/api/admin/reports?status=pending", &admin).await;
    assert_eq!(pending.body["total"], 1);
    assert_eq!(pending.body["reports"][0]["id"], first);

    let bad = app.get("/api/admin/reports?status=bogus", &admin).await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);

    let detail = app
        .get(&format!("/api/admin/reports/{first}"), &admin)
        .await;
    assert_eq!(detail.status, StatusCode::OK);
    assert_eq!(
        detail.body["volunteer_tasks"][0]["volunteer"]["id"],
        volunteer_id
    );
}

#[tokio::test]
async fn test_citizen_status_view_counts_volunteers() {
    let app = TestApp::new().await;
    let (_, citizen) = app.user("c@x.com", "citizen").await;
    let (v1, _) = app.user("v1@x.com", "volunteer").await;
    let (v2, _) = app.user("v2@x.com", "volunteer").await;
    let admin = app.login_admin().await;
    let id = app.submit_report(&citizen, "Storm").await;
    app.assign(&admin, id, v1).await;
    app.assign(&admin, id, v2).await;

    let response = app
        .get(&format!("/api/citizen/reports/{id}/status"), &citizen)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["report_id"], id);
    assert_eq!(response.body["status"], "pending");
    assert_eq!(response.body["assigned_volunteers"], 2);
}

#[tokio::test]
async fn test_citizen_dashboard() {
    let app = TestApp::new().await;
    let (_, citizen) = app.user("c@x.com", "citizen").await;
    let (_, other) = app.user("o@x.com", "citizen").await;
    app.submit_report(&citizen, "Mine").await;
    app.submit_report(&other, "Theirs").await;

    let response = app.get("/api/citizen/dashboard", &citizen).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["my_reports"].as_array().unwrap().len(), 1);
    assert_eq!(response.body["active_disasters"].as_array().unwrap().len(), 2);
    assert!(response.body["recent_alerts"].as_array().unwrap().is_empty());
}
