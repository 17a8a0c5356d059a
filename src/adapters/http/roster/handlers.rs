//! HTTP handlers for roster endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::adapters::http::middleware::RequireParticipant;
use crate::application::handlers::roster::{
    CancelRosterCommand, CancelRosterHandler, CreateRosterCommand, CreateRosterHandler,
    GetRosterHandler, GetRosterQuery, JoinFlexibleCommand, JoinFlexibleHandler, JoinSlotCommand,
    JoinSlotHandler, LeaveRosterCommand, LeaveRosterHandler, ListOpenRostersHandler,
    ListOpenRostersQuery,
};
use crate::domain::foundation::{CommandMetadata, RosterId};
use crate::domain::roster::RosterError;

use super::dto::{
    CreateRosterRequest, ErrorResponse, JoinFlexibleRequest, JoinResponse, LeaveResponse,
    ListRostersQuery, RosterListResponse, RosterResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RosterHandlers {
    create_handler: Arc<CreateRosterHandler>,
    join_slot_handler: Arc<JoinSlotHandler>,
    join_flexible_handler: Arc<JoinFlexibleHandler>,
    leave_handler: Arc<LeaveRosterHandler>,
    cancel_handler: Arc<CancelRosterHandler>,
    get_handler: Arc<GetRosterHandler>,
    list_handler: Arc<ListOpenRostersHandler>,
}

impl RosterHandlers {
    pub fn new(
        create_handler: Arc<CreateRosterHandler>,
        join_slot_handler: Arc<JoinSlotHandler>,
        join_flexible_handler: Arc<JoinFlexibleHandler>,
        leave_handler: Arc<LeaveRosterHandler>,
        cancel_handler: Arc<CancelRosterHandler>,
        get_handler: Arc<GetRosterHandler>,
        list_handler: Arc<ListOpenRostersHandler>,
    ) -> Self {
        Self {
            create_handler,
            join_slot_handler,
            join_flexible_handler,
            leave_handler,
            cancel_handler,
            get_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/rosters - Open a new roster
pub async fn create_roster(
    State(handlers): State<RosterHandlers>,
    RequireParticipant(organizer): RequireParticipant,
    headers: HeaderMap,
    Json(req): Json<CreateRosterRequest>,
) -> Response {
    let cmd = CreateRosterCommand {
        organizer,
        session_type: req.session_type,
        details: req.details(),
        organizer_placement: req.organizer_placement,
    };

    match handlers
        .create_handler
        .handle(cmd, request_metadata(&headers))
        .await
    {
        Ok(result) => {
            let response: RosterResponse = result.roster.snapshot().into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_roster_error(e),
    }
}

/// GET /api/rosters - List open rosters
pub async fn list_rosters(
    State(handlers): State<RosterHandlers>,
    Query(params): Query<ListRostersQuery>,
) -> Response {
    let query = ListOpenRostersQuery {
        session_type: params.session_type,
        with_vacancies_only: params.vacancies_only,
    };

    match handlers.list_handler.handle(query).await {
        Ok(snapshots) => {
            let response: RosterListResponse = snapshots.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_roster_error(e),
    }
}

/// GET /api/rosters/:id - Get a roster snapshot
pub async fn get_roster(
    State(handlers): State<RosterHandlers>,
    Path(roster_id): Path<String>,
) -> Response {
    let roster_id = match parse_roster_id(&roster_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetRosterQuery { roster_id }).await {
        Ok(snapshot) => {
            let response: RosterResponse = snapshot.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_roster_error(e),
    }
}

/// POST /api/rosters/:id/slots/:slot - Take a specific slot
pub async fn join_slot(
    State(handlers): State<RosterHandlers>,
    RequireParticipant(participant): RequireParticipant,
    headers: HeaderMap,
    Path((roster_id, slot)): Path<(String, String)>,
) -> Response {
    let roster_id = match parse_roster_id(&roster_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = JoinSlotCommand {
        roster_id,
        participant,
        slot,
    };

    match handlers
        .join_slot_handler
        .handle(cmd, request_metadata(&headers))
        .await
    {
        Ok(result) => {
            let response: JoinResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_roster_error(e),
    }
}

/// POST /api/rosters/:id/flexible - Join the flexible pool
pub async fn join_flexible(
    State(handlers): State<RosterHandlers>,
    RequireParticipant(participant): RequireParticipant,
    headers: HeaderMap,
    Path(roster_id): Path<String>,
    Json(req): Json<JoinFlexibleRequest>,
) -> Response {
    let roster_id = match parse_roster_id(&roster_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = JoinFlexibleCommand {
        roster_id,
        participant,
        acceptable: req.acceptable,
    };

    match handlers
        .join_flexible_handler
        .handle(cmd, request_metadata(&headers))
        .await
    {
        Ok(result) => {
            let response: JoinResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_roster_error(e),
    }
}

/// POST /api/rosters/:id/leave - Leave a roster
pub async fn leave_roster(
    State(handlers): State<RosterHandlers>,
    RequireParticipant(participant): RequireParticipant,
    headers: HeaderMap,
    Path(roster_id): Path<String>,
) -> Response {
    let roster_id = match parse_roster_id(&roster_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = LeaveRosterCommand {
        roster_id,
        participant,
    };

    match handlers
        .leave_handler
        .handle(cmd, request_metadata(&headers))
        .await
    {
        Ok(result) => {
            let response: LeaveResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_roster_error(e),
    }
}

/// POST /api/rosters/:id/cancel - Cancel a roster (organizer only)
pub async fn cancel_roster(
    State(handlers): State<RosterHandlers>,
    RequireParticipant(requester): RequireParticipant,
    headers: HeaderMap,
    Path(roster_id): Path<String>,
) -> Response {
    let roster_id = match parse_roster_id(&roster_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = CancelRosterCommand {
        roster_id,
        requester,
    };

    match handlers
        .cancel_handler
        .handle(cmd, request_metadata(&headers))
        .await
    {
        Ok(result) => {
            let response: RosterResponse = result.roster.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_roster_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn parse_roster_id(raw: &str) -> Result<RosterId, Response> {
    raw.parse::<RosterId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid roster ID")),
        )
            .into_response()
    })
}

/// Correlates events with the caller's `X-Request-Id` when one is sent.
fn request_metadata(headers: &HeaderMap) -> CommandMetadata {
    let metadata = CommandMetadata::new().with_source("http");
    match headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        Some(id) => metadata.with_correlation_id(id),
        None => metadata,
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_roster_error(error: RosterError) -> Response {
    let status = match &error {
        RosterError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
        RosterError::Forbidden => StatusCode::FORBIDDEN,
        RosterError::NotFound(_) | RosterError::NotAMember(_) => StatusCode::NOT_FOUND,
        RosterError::Cancelled
        | RosterError::CapacityExceeded { .. }
        | RosterError::SlotOccupied { .. } => StatusCode::CONFLICT,
        RosterError::Infrastructure(msg) => {
            error!(error = %msg, "roster request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ErrorResponse::from(&error))).into_response()
}
