//! API Integration Tests
//!
//! Each test spawns a server on a fresh in-memory store. The scenario test
//! also runs against PostgreSQL when DATABASE_URL points at one.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, postgres_config, ErrorBody, EventBody, EventTypeBody, MemberBody,
    MessageBody, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn create_event_type(server: &TestServer, description: &str) -> EventTypeBody {
    let response = server
        .post("/eventTypes", &json!({ "description": description }))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_event(server: &TestServer, type_id: i64, description: &str) -> EventBody {
    let response = server
        .post(
            "/events",
            &json!({ "typeId": type_id, "description": description, "date": "2025-05-01" }),
        )
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_member(server: &TestServer, body: serde_json::Value) -> MemberBody {
    let response = server.post("/members", &body).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
}

// ============================================================================
// Scenario
// ============================================================================

async fn run_race_scenario(server: &TestServer) {
    let race = create_event_type(server, "Race").await;
    let spring = create_event(server, race.id, "Spring Race").await;
    assert_eq!(spring.type_id, race.id);
    assert_eq!(spring.date, "2025-05-01");

    // Type in use
    let response = server.delete(&format!("/eventTypes/{}", race.id)).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.code, "EVENT_TYPE_IN_USE");

    let ana = create_member(server, json!({ "name": "Ana" })).await;
    let response = server
        .post(&format!("/members/{}/events", ana.id), &json!({ "eventId": spring.id }))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Event has registrations
    let response = server.delete(&format!("/events/{}", spring.id)).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.code, "EVENT_HAS_REGISTRATIONS");

    let response = server
        .delete(&format!("/members/{}/events/{}", ana.id, spring.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.delete(&format!("/events/{}", spring.id)).await.unwrap();
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!body.message.is_empty());

    let response = server.delete(&format!("/eventTypes/{}", race.id)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.delete(&format!("/members/{}", ana.id)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_race_scenario() {
    let server = TestServer::start().await.expect("Failed to start server");
    run_race_scenario(&server).await;
}

#[tokio::test]
async fn test_race_scenario_postgres() {
    let Some(config) = postgres_config() else {
        eprintln!("Skipping test: DATABASE_URL not set to a PostgreSQL URL");
        return;
    };

    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");
    run_race_scenario(&server).await;
}

// ============================================================================
// Event Type Tests
// ============================================================================

#[tokio::test]
async fn test_event_type_crud() {
    let server = TestServer::start().await.expect("Failed to start server");

    let created = create_event_type(&server, "Trail Run").await;
    let response = server.get(&format!("/eventTypes/{}", created.id)).await.unwrap();
    let fetched: EventTypeBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, created);

    let response = server
        .put(&format!("/eventTypes/{}", created.id), &json!({ "description": "Night Run" }))
        .await
        .unwrap();
    let updated: EventTypeBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.description, "Night Run");

    let response = server.get("/eventTypes").await.unwrap();
    let all: Vec<EventTypeBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all, vec![updated]);
}

#[tokio::test]
async fn test_event_type_validation_and_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/eventTypes", &json!({})).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.message, "Description is required");

    let response = server.get("/eventTypes/999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .put("/eventTypes/999", &json!({ "description": "Ghost" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.delete("/eventTypes/999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Event Tests
// ============================================================================

#[tokio::test]
async fn test_event_with_unknown_type() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/events",
            &json!({ "typeId": 9999, "description": "Ghost", "date": "2025-05-01" }),
        )
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.code, "INVALID_EVENT_TYPE");

    let response = server.get("/events").await.unwrap();
    let events: Vec<EventBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_event_bad_date_and_missing_fields() {
    let server = TestServer::start().await.expect("Failed to start server");
    let race = create_event_type(&server, "Race").await;

    let response = server
        .post(
            "/events",
            &json!({ "typeId": race.id, "description": "Spring Race", "date": "not-a-date" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post("/events", &json!({ "typeId": race.id }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_event_update() {
    let server = TestServer::start().await.expect("Failed to start server");
    let race = create_event_type(&server, "Race").await;
    let walk = create_event_type(&server, "Walk").await;
    let event = create_event(&server, race.id, "Spring Race").await;

    let response = server
        .put(
            &format!("/events/{}", event.id),
            &json!({ "typeId": walk.id, "description": "Spring Walk", "date": "2025-06-01" }),
        )
        .await
        .unwrap();
    let updated: EventBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.type_id, walk.id);
    assert_eq!(updated.date, "2025-06-01");

    let response = server
        .put(
            "/events/999",
            &json!({ "typeId": walk.id, "description": "x", "date": "2025-06-01" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_member_requires_name() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/members", &json!({ "name": "" })).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.message, "Name is required");

    let response = server.get("/members").await.unwrap();
    let members: Vec<MemberBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(members.is_empty());
}

#[tokio::test]
async fn test_member_update_replaces_associations() {
    let server = TestServer::start().await.expect("Failed to start server");
    let member = create_member(
        &server,
        json!({ "name": "Ana", "preferredEventTypeIds": [1, 2], "eventIds": [3] }),
    )
    .await;
    assert_eq!(member.preferred_event_type_ids, vec![1, 2]);

    let response = server
        .put(
            &format!("/members/{}", member.id),
            &json!({ "name": "Ana Maria", "preferredEventTypeIds": [4] }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/members/{}", member.id)).await.unwrap();
    let fetched: MemberBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.name, "Ana Maria");
    assert_eq!(fetched.preferred_event_type_ids, vec![4]);
    assert!(fetched.event_ids.is_empty());

    let response = server
        .put("/members/999", &json!({ "name": "Nobody" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_member_delete() {
    let server = TestServer::start().await.expect("Failed to start server");
    let member = create_member(&server, json!({ "name": "Rui", "preferredEventTypeIds": [1] })).await;

    let response = server.delete(&format!("/members/{}", member.id)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/members/{}", member.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.delete(&format!("/members/{}", member.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_registration_unknown_event() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/members/5/events", &json!({ "eventId": 9999 }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.post("/members/5/events", &json!({})).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.message, "eventId is required");
}

#[tokio::test]
async fn test_zero_ids_are_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");
    let member = create_member(&server, json!({ "name": "Ana" })).await;

    let response = server
        .post(&format!("/members/{}/eventTypes", member.id), &json!({ "eventTypeId": 0 }))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.message, "eventTypeId is required");

    let response = server
        .post(&format!("/members/{}/events", member.id), &json!({ "eventId": 0 }))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.message, "eventId is required");

    let response = server.get(&format!("/members/{}", member.id)).await.unwrap();
    let fetched: MemberBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(fetched.preferred_event_type_ids.is_empty());
    assert!(fetched.event_ids.is_empty());
}

#[tokio::test]
async fn test_preferences() {
    let server = TestServer::start().await.expect("Failed to start server");
    let race = create_event_type(&server, "Race").await;
    let member = create_member(&server, json!({ "name": "Eva" })).await;
    let path = format!("/members/{}/eventTypes", member.id);

    let response = server.post(&path, &json!({ "eventTypeId": race.id })).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&path).await.unwrap();
    let types: Vec<EventTypeBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(types, vec![race.clone()]);

    let response = server.delete(&format!("{path}/{}", race.id)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    // Removing again is a no-op
    let response = server.delete(&format!("{path}/{}", race.id)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/members/999/eventTypes").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Request Shape Tests
// ============================================================================

#[tokio::test]
async fn test_non_numeric_id() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/events/abc").await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_malformed_json() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post_raw("/eventTypes", "application/json", "{\"description\":")
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.code, "INVALID_BODY");
}
