//! Integration tests for the roster HTTP endpoints.
//!
//! These tests send requests through the full axum router backed by the
//! in-memory adapters and check status codes and JSON bodies.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use party_roster::adapters::events::InMemoryEventBus;
use party_roster::adapters::http::{app_router, RosterHandlers};
use party_roster::adapters::storage::InMemoryRosterRepository;
use party_roster::application::{
    CancelRosterHandler, CreateRosterHandler, GetRosterHandler, JoinFlexibleHandler,
    JoinSlotHandler, LeaveRosterHandler, ListOpenRostersHandler, RosterLocks,
};
use party_roster::domain::roster::{SeatPolicy, TemplateCatalog};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    let repo = Arc::new(InMemoryRosterRepository::new());
    let bus = Arc::new(InMemoryEventBus::recording());
    let locks = Arc::new(RosterLocks::new());
    let handlers = RosterHandlers::new(
        Arc::new(CreateRosterHandler::new(
            repo.clone(),
            bus.clone(),
            TemplateCatalog::new(),
            SeatPolicy::Overwrite,
        )),
        Arc::new(JoinSlotHandler::new(repo.clone(), bus.clone(), locks.clone())),
        Arc::new(JoinFlexibleHandler::new(
            repo.clone(),
            bus.clone(),
            locks.clone(),
        )),
        Arc::new(LeaveRosterHandler::new(repo.clone(), bus.clone(), locks.clone())),
        Arc::new(CancelRosterHandler::new(repo.clone(), bus, locks)),
        Arc::new(GetRosterHandler::new(repo.clone())),
        Arc::new(ListOpenRostersHandler::new(repo)),
    );
    app_router(handlers, Duration::from_secs(5))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    participant: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(participant) = participant {
        builder = builder.header("X-Participant", participant);
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_light(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/rosters",
        Some("Organizer"),
        Some(json!({"session_type": "light", "title": "Weekly raid"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn create_then_get_roster() {
    let app = app();
    let id = create_light(&app).await;

    let (status, body) = send(&app, "GET", &format!("/api/rosters/{}", id), None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Weekly raid");
    assert_eq!(body["capacity"], 4);
    assert_eq!(body["slots"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn flexible_join_reports_auto_assignment() {
    let app = app();
    let id = create_light(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/rosters/{}/flexible", id),
        Some("P"),
        Some(json!({"acceptable": {"roles": ["Healer"]}})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notes"], json!(["P → Healer"]));
    assert_eq!(body["roster"]["slots"][1]["occupant"], "P");
    assert_eq!(body["roster"]["slots"][1]["auto_assigned"], true);
}

#[tokio::test]
async fn slot_join_and_leave() {
    let app = app();
    let id = create_light(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/rosters/{}/slots/Tank", id),
        Some("A"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roster"]["occupancy"], 1);

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/rosters/{}/leave", id),
        Some("A"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vacated_slot"], "Tank");
    assert_eq!(body["roster"]["occupancy"], 0);
}

#[tokio::test]
async fn error_statuses_follow_roster_errors() {
    let app = app();
    let id = create_light(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/rosters/{}/slots/Bard", id),
        Some("A"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/rosters/{}/leave", id),
        Some("Stranger"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/rosters/{}/cancel", id),
        Some("A"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, "GET", "/api/rosters/not-a-uuid", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn full_roster_returns_conflict() {
    let app = app();
    let id = create_light(&app).await;
    for (who, slot) in [("A", "Tank"), ("B", "Healer"), ("C", "DPS1"), ("D", "DPS2")] {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/rosters/{}/slots/{}", id, slot),
            Some(who),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/rosters/{}/flexible", id),
        Some("E"),
        Some(json!({"acceptable": "any"})),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CAPACITY_EXCEEDED");
}

#[tokio::test]
async fn missing_participant_header_is_rejected() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/rosters",
        None,
        Some(json!({"session_type": "light", "title": "Weekly raid"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn list_filters_by_session_type() {
    let app = app();
    create_light(&app).await;
    send(
        &app,
        "POST",
        "/api/rosters",
        Some("Organizer"),
        Some(json!({"session_type": "free8", "title": "Open run"})),
    )
    .await;

    let (status, body) = send(&app, "GET", "/api/rosters?session_type=free8", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["title"], "Open run");
}
