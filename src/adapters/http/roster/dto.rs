//! HTTP DTOs for roster endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::roster::{JoinRosterResult, LeaveRosterResult};
use crate::domain::foundation::{RosterStatus, Timestamp};
use crate::domain::roster::{
    Acceptable, FlexibleView, Placement, RosterDetails, RosterError, RosterSnapshot, SessionType,
    SlotView,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to open a roster.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRosterRequest {
    pub session_type: SessionType,
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub starts_at: Option<Timestamp>,
    #[serde(default)]
    pub comment: Option<String>,
    /// `{"slot": "Tank"}` or `{"flexible": "any"}` / `{"flexible": {"roles": [..]}}`
    #[serde(default)]
    pub organizer_placement: Option<Placement>,
}

impl CreateRosterRequest {
    pub fn details(&self) -> RosterDetails {
        RosterDetails {
            title: self.title.clone(),
            location: self.location.clone(),
            starts_at: self.starts_at,
            comment: self.comment.clone(),
        }
    }
}

/// Request to join the flexible pool.
#[derive(Debug, Clone, Deserialize)]
pub struct JoinFlexibleRequest {
    pub acceptable: Acceptable,
}

/// Query parameters for listing rosters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListRostersQuery {
    #[serde(default)]
    pub session_type: Option<SessionType>,
    #[serde(default)]
    pub vacancies_only: bool,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct SlotResponse {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupant: Option<String>,
    pub auto_assigned: bool,
}

impl From<SlotView> for SlotResponse {
    fn from(view: SlotView) -> Self {
        Self {
            name: view.name,
            occupant: view.occupant.map(|p| p.to_string()),
            auto_assigned: view.auto_assigned,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FlexibleResponse {
    pub participant: String,
    /// Declared choice, e.g. `any` or `Tank/Healer`.
    pub declared: String,
    /// Declared roles still backed by an empty slot.
    pub open: String,
}

impl From<FlexibleView> for FlexibleResponse {
    fn from(view: FlexibleView) -> Self {
        Self {
            participant: view.participant.to_string(),
            declared: view.declared.to_string(),
            open: view.open.to_string(),
        }
    }
}

/// Detailed roster view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct RosterResponse {
    pub id: String,
    pub session_type: SessionType,
    pub organizer: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub status: RosterStatus,
    pub capacity: usize,
    pub occupancy: usize,
    pub slots: Vec<SlotResponse>,
    pub flexible: Vec<FlexibleResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<RosterSnapshot> for RosterResponse {
    fn from(snapshot: RosterSnapshot) -> Self {
        Self {
            id: snapshot.id.to_string(),
            session_type: snapshot.session_type,
            organizer: snapshot.organizer.to_string(),
            title: snapshot.title,
            location: snapshot.location,
            starts_at: snapshot.starts_at.map(|t| t.to_rfc3339()),
            comment: snapshot.comment,
            status: snapshot.status,
            capacity: snapshot.capacity,
            occupancy: snapshot.occupancy,
            slots: snapshot.slots.into_iter().map(Into::into).collect(),
            flexible: snapshot.flexible.into_iter().map(Into::into).collect(),
            created_at: snapshot.created_at.to_rfc3339(),
            updated_at: snapshot.updated_at.to_rfc3339(),
        }
    }
}

/// Response for join operations.
#[derive(Debug, Clone, Serialize)]
pub struct JoinResponse {
    pub roster: RosterResponse,
    /// Seats filled by auto-assignment, as `participant → slot`.
    pub notes: Vec<String>,
    pub just_filled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displaced: Option<String>,
}

impl From<JoinRosterResult> for JoinResponse {
    fn from(result: JoinRosterResult) -> Self {
        Self {
            roster: result.roster.into(),
            notes: result.outcome.notes.iter().map(ToString::to_string).collect(),
            just_filled: result.outcome.just_filled,
            displaced: result.outcome.displaced.map(|p| p.to_string()),
        }
    }
}

/// Response for leave operations.
#[derive(Debug, Clone, Serialize)]
pub struct LeaveResponse {
    pub roster: RosterResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vacated_slot: Option<String>,
    pub notes: Vec<String>,
}

impl From<LeaveRosterResult> for LeaveResponse {
    fn from(result: LeaveRosterResult) -> Self {
        Self {
            roster: result.roster.into(),
            vacated_slot: result.outcome.vacated_slot,
            notes: result.outcome.notes.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Roster list.
#[derive(Debug, Clone, Serialize)]
pub struct RosterListResponse {
    pub items: Vec<RosterResponse>,
    pub total: usize,
}

impl From<Vec<RosterSnapshot>> for RosterListResponse {
    fn from(snapshots: Vec<RosterSnapshot>) -> Self {
        Self {
            total: snapshots.len(),
            items: snapshots.into_iter().map(Into::into).collect(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }
}

impl From<&RosterError> for ErrorResponse {
    fn from(error: &RosterError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.message(),
        }
    }
}
