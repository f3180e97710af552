//! Integration tests for registrar-api endpoints
//!
//! Tests cover:
//! - Status code mapping: 200/201/204 success, 400 bad id, 404 missing, 500 failures
//! - Full CRUD round trips for every entity
//! - Career -> courses and professor -> events nested routes
//! - Health endpoint

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use registrar_api::{build_router, AppState};
use registrar_common::db::init_memory_database;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: app over a fresh in-memory database
async fn setup_app() -> Router {
    let db = init_memory_database()
        .await
        .expect("Should open in-memory database");
    build_router(AppState::new(db))
}

/// Test helper: Create request without body
fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Create request with JSON body
fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Send request, return status and parsed JSON body (Null when empty)
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Should parse JSON")
    };
    (status, body)
}

// =============================================================================
// Health Endpoint
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app().await;

    let (status, body) = send(&app, test_request("GET", "/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "registrar-api");
    assert!(body["version"].is_string());
}

// =============================================================================
// Careers
// =============================================================================

#[tokio::test]
async fn test_careers_empty_list() {
    let app = setup_app().await;

    let (status, body) = send(&app, test_request("GET", "/careers")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_career_crud_round_trip() {
    let app = setup_app().await;

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/careers",
            json!({"name": "Computer Science", "description": "CS"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Computer Science");
    let id = created["id"].as_i64().expect("id should be assigned");

    let (status, fetched) = send(&app, test_request("GET", &format!("/careers/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            &format!("/careers/{}", id),
            json!({"name": "Informatics", "description": "Renamed"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({"id": id, "name": "Informatics", "description": "Renamed"}));

    let (status, list) = send(&app, test_request("GET", "/careers")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([updated]));
}

#[tokio::test]
async fn test_career_non_numeric_id_is_400() {
    let app = setup_app().await;

    let (status, body) = send(&app, test_request("GET", "/careers/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid ID");

    let (status, _) = send(
        &app,
        json_request("PUT", "/careers/abc", json!({"name": "X"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, test_request("DELETE", "/careers/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_career_missing_is_404() {
    let app = setup_app().await;

    let (status, body) = send(&app, test_request("GET", "/careers/999999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Career not found");

    let (status, _) = send(
        &app,
        json_request("PUT", "/careers/999999", json!({"name": "Ghost"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_career_empty_body_is_500() {
    let app = setup_app().await;

    let (status, body) = send(&app, json_request("POST", "/careers", json!({}))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error inserting career: Name must not be null");

    // Nothing persisted
    let (_, list) = send(&app, test_request("GET", "/careers")).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_whitespace_only_name_is_500() {
    let app = setup_app().await;

    let (status, body) = send(&app, json_request("POST", "/careers", json!({"name": "   "}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error inserting career: Name must not be empty");

    let (status, body) = send(
        &app,
        json_request("POST", "/professors", json!({"firstName": "\t\n"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error inserting professor: First name must not be empty");

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/terms",
            json!({"title": " ", "startDate": "2023-08-21", "endDate": "2023-12-15"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error inserting term: Title must not be empty");

    let (_, list) = send(&app, test_request("GET", "/careers")).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_career_delete_twice() {
    let app = setup_app().await;
    let (_, created) = send(&app, json_request("POST", "/careers", json!({"name": "Law"}))).await;
    let uri = format!("/careers/{}", created["id"]);

    let response = app.clone().oneshot(test_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty(), "204 must have an empty body");

    let (status, body) = send(&app, test_request("DELETE", &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Career not found");
}

#[tokio::test]
async fn test_career_courses_route() {
    let app = setup_app().await;
    let (_, cs) = send(&app, json_request("POST", "/careers", json!({"name": "CS"}))).await;
    let (_, bio) = send(&app, json_request("POST", "/careers", json!({"name": "Bio"}))).await;

    let (_, algorithms) = send(
        &app,
        json_request("POST", "/courses", json!({"name": "Algorithms", "careerId": cs["id"]})),
    )
    .await;
    send(
        &app,
        json_request("POST", "/courses", json!({"name": "Genetics", "careerId": bio["id"]})),
    )
    .await;

    let (status, courses) = send(
        &app,
        test_request("GET", &format!("/careers/{}/courses", cs["id"])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(courses, json!([algorithms]));

    let (status, courses) = send(&app, test_request("GET", "/careers/424242/courses")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(courses, json!([]));
}

// =============================================================================
// Courses
// =============================================================================

#[tokio::test]
async fn test_course_crud_round_trip() {
    let app = setup_app().await;
    let (_, career) = send(&app, json_request("POST", "/careers", json!({"name": "Math"}))).await;

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/courses",
            json!({"name": "Calculus", "description": "Limits", "careerId": career["id"]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["careerId"], career["id"]);
    let uri = format!("/courses/{}", created["id"]);

    let (status, updated) = send(
        &app,
        json_request("PUT", &uri, json!({"name": "Calculus II", "careerId": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Calculus II");
    assert_eq!(updated["description"], "");
    assert!(updated["careerId"].is_null());

    let (status, _) = send(&app, test_request("DELETE", &uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, test_request("GET", &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Course not found");
}

#[tokio::test]
async fn test_course_unknown_career_is_500() {
    let app = setup_app().await;

    let (status, body) = send(
        &app,
        json_request("POST", "/courses", json!({"name": "Orphan", "careerId": 31337})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Error inserting course: "));
}

// =============================================================================
// Professors and events
// =============================================================================

#[tokio::test]
async fn test_professor_crud_round_trip() {
    let app = setup_app().await;

    let (status, created) = send(
        &app,
        json_request("POST", "/professors", json!({"firstName": "Grace", "lastName": "Hopper"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["firstName"], "Grace");
    let uri = format!("/professors/{}", created["id"]);

    let (status, fetched) = send(&app, test_request("GET", &uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, body) = send(
        &app,
        json_request("PUT", &uri, json!({"firstName": "", "lastName": "Hopper"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error updating professor: First name must not be empty");

    let (status, _) = send(&app, test_request("DELETE", &uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_professor_event_nested_routes() {
    let app = setup_app().await;
    let (_, prof) = send(
        &app,
        json_request("POST", "/professors", json!({"firstName": "Alan", "lastName": "Turing"})),
    )
    .await;
    let (_, other) = send(
        &app,
        json_request("POST", "/professors", json!({"firstName": "Ada"})),
    )
    .await;
    let base = format!("/events/{}", prof["id"]);

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            &base,
            json!({
                "title": "Seminar",
                "description": "Room 101",
                "startDate": "2023-10-01",
                "endDate": "2023-10-02"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["professorId"], prof["id"]);
    assert_eq!(created["startDate"], "2023-10-01T00:00:00Z");

    let (status, list) = send(&app, test_request("GET", &base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([created.clone()]));

    let item = format!("{}/{}", base, created["id"]);
    let (status, fetched) = send(&app, test_request("GET", &item)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    // Same event id under another professor
    let foreign = format!("/events/{}/{}", other["id"], created["id"]);
    let (status, body) = send(&app, test_request("GET", &foreign)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Professor event not found");

    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            &item,
            json!({
                "title": "Keynote",
                "startDate": "2023-10-05T09:00:00Z",
                "endDate": "2023-10-05T10:00:00Z"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Keynote");
    assert_eq!(updated["description"], "");

    let (status, _) = send(&app, test_request("DELETE", &foreign)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, test_request("DELETE", &item)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, all) = send(&app, test_request("GET", "/events")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn test_professor_event_bad_ids() {
    let app = setup_app().await;

    let (status, _) = send(&app, test_request("GET", "/events/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, test_request("GET", "/events/1/xyz")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        json_request("POST", "/events/nope", json!({"title": "T"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_professor_event_missing_dates_is_500() {
    let app = setup_app().await;
    let (_, prof) = send(
        &app,
        json_request("POST", "/professors", json!({"firstName": "Edsger"})),
    )
    .await;

    let (status, body) = send(
        &app,
        json_request("POST", &format!("/events/{}", prof["id"]), json!({"title": "Talk"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "Error inserting professor event: Start Date must not be null"
    );
}

// =============================================================================
// Terms
// =============================================================================

#[tokio::test]
async fn test_term_round_trip() {
    let app = setup_app().await;

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/terms",
            json!({"title": "T1", "startDate": "2023-08-21", "endDate": "2023-12-15"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let uri = format!("/terms/{}", created["id"]);

    let (status, fetched) = send(&app, test_request("GET", &uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "T1");
    assert_eq!(fetched["startDate"], created["startDate"]);
    assert_eq!(fetched["endDate"], created["endDate"]);

    let start: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(fetched["startDate"].clone()).unwrap();
    assert_eq!(start.to_rfc3339(), "2023-08-21T00:00:00+00:00");
}

#[tokio::test]
async fn test_term_missing_id_operations() {
    let app = setup_app().await;

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            "/terms/55",
            json!({"title": "Ghost", "startDate": "2024-01-01", "endDate": "2024-02-01"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Term not found");

    let (status, _) = send(&app, test_request("DELETE", "/terms/55")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
