//! Integration tests for schedule HTTP endpoints.
//!
//! These tests drive the full router in-process:
//! 1. Request DTOs deserialize and reach the handlers
//! 2. Domain errors map to the right status codes
//! 3. Bookings made over HTTP show up in later queries

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use session_calendar::adapters::http::{schedule_routes, ScheduleHandlers};
use session_calendar::adapters::storage::{InMemorySessionRepository, StaticSeedSource};
use session_calendar::domain::schedule::SlotGrid;
use session_calendar::ports::SessionRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn seeded_repository() -> Arc<InMemorySessionRepository> {
    Arc::new(
        InMemorySessionRepository::from_records(SlotGrid::default(), StaticSeedSource::records())
            .unwrap(),
    )
}

fn app(repository: Arc<InMemorySessionRepository>) -> Router {
    schedule_routes(ScheduleHandlers::from_repository(repository))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// =============================================================================
// Queries
// =============================================================================

#[tokio::test]
async fn health_returns_ok() {
    let (status, body) = send(app(seeded_repository()), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".to_string()));
}

#[tokio::test]
async fn lists_sessions_of_a_day() {
    let (status, body) = send(app(seeded_repository()), get("/sessions?day=monday")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["day"], "monday");
    let clients: Vec<&str> = body["sessions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["client"].as_str().unwrap())
        .collect();
    assert_eq!(clients, vec!["Maria Silva", "João Santos"]);
}

#[tokio::test]
async fn unknown_day_is_bad_request() {
    let (status, body) = send(app(seeded_repository()), get("/sessions?day=sunday")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DAY");
}

#[tokio::test]
async fn gets_session_at_slot() {
    let (status, body) = send(app(seeded_repository()), get("/sessions/tuesday/10:00")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["client"], "Ana Costa");
    assert_eq!(body["status"], "pending");
}

#[tokio::test]
async fn free_slot_is_not_found() {
    let (status, body) = send(app(seeded_repository()), get("/sessions/tuesday/11:00")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn lists_time_slots() {
    let (status, body) = send(app(seeded_repository()), get("/slots")).await;
    assert_eq!(status, StatusCode::OK);
    let slots = body.as_array().unwrap();
    assert_eq!(slots.len(), 10);
    assert_eq!(slots[0], "08:00");
    assert_eq!(slots[9], "17:00");
}

#[tokio::test]
async fn builds_week_grid() {
    let (status, body) = send(
        app(seeded_repository()),
        get("/grid?date=2025-10-15&offset=1"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["week"], "2025-10-20");
    assert_eq!(body["view"], "week");
    assert_eq!(body["columns"].as_array().unwrap().len(), 5);
    assert_eq!(body["rows"].as_array().unwrap().len(), 10);

    // 09:00 row, Monday column
    assert_eq!(body["rows"][1]["time"], "09:00");
    assert_eq!(body["rows"][1]["cells"][0]["client"], "Maria Silva");
}

#[tokio::test]
async fn builds_day_grid() {
    let (status, body) = send(
        app(seeded_repository()),
        get("/grid?date=2025-10-15&view=day&day=friday"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["columns"][0]["day"], "friday");
    assert_eq!(body["columns"][0]["date"], "2025-10-17");
}

#[tokio::test]
async fn unknown_view_is_bad_request() {
    let (status, body) = send(app(seeded_repository()), get("/grid?view=month")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn out_of_range_week_offset_is_bad_request() {
    for uri in [
        "/grid?date=2025-10-15&offset=20000000",
        "/grid?date=2025-10-15&offset=9223372036854775807",
        "/grid?date=2025-10-15&offset=-9223372036854775808",
    ] {
        let (status, body) = send(app(seeded_repository()), get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["code"], "VALIDATION_FAILED");
    }
}

// =============================================================================
// Booking
// =============================================================================

#[tokio::test]
async fn books_free_slot() {
    let repository = seeded_repository();
    let before = repository.count().await.unwrap();

    let (status, body) = send(
        app(repository.clone()),
        post_json(
            "/sessions",
            json!({
                "id": 100,
                "day": "thursday",
                "time": "16:00",
                "client": "Rafael Souza",
                "duration": 50,
                "status": "confirmed"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 100);
    assert_eq!(repository.count().await.unwrap(), before + 1);

    let (status, body) = send(app(repository), get("/sessions/thursday/16:00")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["client"], "Rafael Souza");
}

#[tokio::test]
async fn double_booking_is_conflict() {
    let repository = seeded_repository();
    let before = repository.all().await.unwrap();

    let (status, body) = send(
        app(repository.clone()),
        post_json(
            "/sessions",
            json!({
                "id": 100,
                "day": "monday",
                "time": "09:00",
                "client": "Someone Else",
                "duration": 50
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "SLOT_CONFLICT");
    assert_eq!(repository.all().await.unwrap(), before);
}

#[tokio::test]
async fn time_outside_grid_is_bad_request() {
    let repository = seeded_repository();

    let (status, body) = send(
        app(repository.clone()),
        post_json(
            "/sessions",
            json!({
                "id": 100,
                "day": "monday",
                "time": "07:00",
                "client": "Early Bird",
                "duration": 50
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_TIME");
    assert!(repository
        .session_at(
            session_calendar::domain::schedule::Weekday::Monday,
            "07:00".parse().unwrap()
        )
        .await
        .unwrap()
        .is_none());
}
