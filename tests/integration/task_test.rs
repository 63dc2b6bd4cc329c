//! Integration tests for volunteer assignment and the task lifecycle.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

struct Scenario {
    app: TestApp,
    admin: String,
    volunteer: String,
    volunteer_id: i64,
    report_id: i64,
}

async fn scenario() -> Scenario {
    let app = TestApp::new().await;
    let (_, citizen) = app.user("c@x.com", "citizen").await;
    let (volunteer_id, volunteer) = app.user("v@x.com", "volunteer").await;
    let admin = app.login_admin().await;
    let report_id = app.submit_report(&citizen, "Collapsed wall").await;
    Scenario {
        app,
        admin,
        volunteer,
        volunteer_id,
        report_id,
    }
}

#[tokio::test]
async fn test_assign_start_complete() {
    let s = scenario().await;

    let response = s
        .app
        .post(
            &format!("/api/admin/reports/{}/assign", s.report_id),
            json!({ "volunteer_id": s.volunteer_id, "task_description": "clear debris" }),
            &s.admin,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Volunteer assigned successfully");
    assert_eq!(response.body["task"]["status"], "assigned");
    assert_eq!(response.body["task"]["volunteer"]["id"], s.volunteer_id);
    let task_id = response.body["task"]["id"].as_i64().unwrap();

    let started = s
        .app
        .post(
            &format!("/api/volunteer/tasks/{task_id}/start"),
            json!({}),
            &s.volunteer,
        )
        .await;
    assert_eq!(started.status, StatusCode::OK);
    assert_eq!(started.body["message"], "Task started");
    assert_eq!(started.body["task"]["status"], "in_progress");
    assert!(started.body["task"]["started_at"].is_string());

    let completed = s
        .app
        .post(
            &format!("/api/volunteer/tasks/{task_id}/complete"),
            json!({}),
            &s.volunteer,
        )
        .await;
    assert_eq!(completed.status, StatusCode::OK);
    assert_eq!(completed.body["message"], "Task marked as completed");
    assert_eq!(completed.body["task"]["status"], "completed");
    assert!(completed.body["task"]["completed_at"].is_string());

    // Completing a task leaves the report alone.
    let report = s
        .app
        .get(&format!("/api/admin/reports/{}", s.report_id), &s.admin)
        .await;
    assert_eq!(report.body["status"], "pending");
}

#[tokio::test]
async fn test_start_requires_assigned_state() {
    let s = scenario().await;
    let task_id = s.app.assign(&s.admin, s.report_id, s.volunteer_id).await;
    let start = format!("/api/volunteer/tasks/{task_id}/start");

    s.app.post(&start, json!({}), &s.volunteer).await;
    let again = s.app.post(&start, json!({}), &s.volunteer).await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);
    assert_eq!(again.error(), "Task must be in ASSIGNED status");

    let task = s
        .app
        .get(&format!("/api/volunteer/tasks/{task_id}"), &s.volunteer)
        .await;
    assert_eq!(task.body["status"], "in_progress");
}

#[tokio::test]
async fn test_complete_skips_in_progress_but_not_twice() {
    let s = scenario().await;
    let task_id = s.app.assign(&s.admin, s.report_id, s.volunteer_id).await;
    let complete = format!("/api/volunteer/tasks/{task_id}/complete");

    let first = s.app.post(&complete, json!({}), &s.volunteer).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["task"]["status"], "completed");
    assert!(first.body["task"]["started_at"].is_null());

    let second = s.app.post(&complete, json!({}), &s.volunteer).await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.error(), "Task already completed");
}

#[tokio::test]
async fn test_generic_update_can_fail_a_task() {
    let s = scenario().await;
    let task_id = s.app.assign(&s.admin, s.report_id, s.volunteer_id).await;

    let response = s
        .app
        .patch(
            &format!("/api/volunteer/tasks/{task_id}"),
            json!({ "status": "FAILED", "notes": "road blocked" }),
            &s.volunteer,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Task updated successfully");
    assert_eq!(response.body["task"]["status"], "failed");
    assert_eq!(response.body["task"]["notes"], "road blocked");

    let invalid = s
        .app
        .patch(
            &format!("/api/volunteer/tasks/{task_id}"),
            json!({ "status": "paused" }),
            &s.volunteer,
        )
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_tasks_are_private_to_their_volunteer() {
    let s = scenario().await;
    let (_, other) = s.app.user("v2@x.com", "volunteer").await;
    let task_id = s.app.assign(&s.admin, s.report_id, s.volunteer_id).await;

    let path = format!("/api/volunteer/tasks/{task_id}");
    assert_eq!(s.app.get(&path, &other).await.status, StatusCode::FORBIDDEN);
    assert_eq!(
        s.app
            .post(&format!("{path}/start"), json!({}), &other)
            .await
            .status,
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        s.app.get("/api/volunteer/tasks/9999", &other).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_assign_validation() {
    let s = scenario().await;
    let (citizen_id, _) = s.app.user("c2@x.com", "citizen").await;
    let path = format!("/api/admin/reports/{}/assign", s.report_id);

    let missing = s
        .app
        .post(&path, json!({ "volunteer_id": s.volunteer_id }), &s.admin)
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);

    let not_volunteer = s
        .app
        .post(
            &path,
            json!({ "volunteer_id": citizen_id, "task_description": "help" }),
            &s.admin,
        )
        .await;
    assert_eq!(not_volunteer.status, StatusCode::BAD_REQUEST);
    assert_eq!(not_volunteer.error(), "Selected user is not a volunteer");

    let no_user = s
        .app
        .post(
            &path,
            json!({ "volunteer_id": 9999, "task_description": "help" }),
            &s.admin,
        )
        .await;
    assert_eq!(no_user.status, StatusCode::NOT_FOUND);

    let no_report = s
        .app
        .post(
            "/api/admin/reports/9999/assign",
            json!({ "volunteer_id": s.volunteer_id, "task_description": "help" }),
            &s.admin,
        )
        .await;
    assert_eq!(no_report.status, StatusCode::NOT_FOUND);
    assert_eq!(s.app.count("volunteer_tasks").await, 0);
}

#[tokio::test]
async fn test_task_list_and_dashboard() {
    let s = scenario().await;
    let first = s.app.assign(&s.admin, s.report_id, s.volunteer_id).await;
    s.app.assign(&s.admin, s.report_id, s.volunteer_id).await;
    s.app
        .post(
            &format!("/api/volunteer/tasks/{first}/start"),
            json!({}),
            &s.volunteer,
        )
        .await;

    let all = s.app.get("/api/volunteer/tasks", &s.volunteer).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body["total"], 2);

    let in_progress = s
        .app
        .get("/api/volunteer/tasks?status=IN_PROGRESS", &s.volunteer)
        .await;
    assert_eq!(in_progress.body["total"], 1);
    assert_eq!(in_progress.body["tasks"][0]["id"], first);

    let dashboard = s.app.get("/api/volunteer/dashboard", &s.volunteer).await;
    assert_eq!(dashboard.status, StatusCode::OK);
    assert_eq!(dashboard.body["total_tasks"], 2);
    assert_eq!(dashboard.body["assigned"], 1);
    assert_eq!(dashboard.body["in_progress"], 1);
    assert_eq!(dashboard.body["completed"], 0);
    assert_eq!(dashboard.body["recent_tasks"].as_array().unwrap().len(), 2);

    let roster = s.app.get("/api/admin/volunteers", &s.admin).await;
    assert_eq!(roster.body["total"], 1);
    assert_eq!(roster.body["volunteers"][0]["id"], s.volunteer_id);
}
