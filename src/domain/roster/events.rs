//! Roster domain events.
//!
//! Events published when a roster changes:
//! - `RosterCreated` - New roster opened for recruitment
//! - `ParticipantJoined` - Participant took a slot or joined the pool
//! - `ParticipantLeft` - Participant left the roster
//! - `ParticipantsAutoAssigned` - Solver seated flexible participants
//! - `RosterFilled` - Occupancy reached capacity (one-shot per fill)
//! - `RosterCancelled` - Organizer closed recruitment

use serde::{Deserialize, Serialize};

use super::aggregate::Placement;
use super::seating::AutoAssignment;
use super::template::SessionType;
use crate::domain::foundation::{domain_event, EventId, ParticipantId, RosterId, Timestamp};

// ════════════════════════════════════════════════════════════════════════════
// RosterCreated
// ════════════════════════════════════════════════════════════════════════════

/// Published when an organizer opens a roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterCreated {
    pub event_id: EventId,
    pub roster_id: RosterId,
    pub organizer: ParticipantId,
    pub session_type: SessionType,
    pub title: String,
    pub capacity: usize,
    pub created_at: Timestamp,
}

domain_event!(
    RosterCreated,
    event_type = "roster.created.v1",
    schema_version = 1,
    aggregate_id = roster_id,
    aggregate_type = "Roster",
    occurred_at = created_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// ParticipantJoined
// ════════════════════════════════════════════════════════════════════════════

/// Published when a participant takes a slot or declares flexibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantJoined {
    pub event_id: EventId,
    pub roster_id: RosterId,
    pub participant: ParticipantId,
    pub placement: Placement,
    /// Direct occupant pushed out by a seat overwrite.
    pub displaced: Option<ParticipantId>,
    pub occupancy: usize,
    pub joined_at: Timestamp,
}

domain_event!(
    ParticipantJoined,
    event_type = "roster.participant_joined.v1",
    schema_version = 1,
    aggregate_id = roster_id,
    aggregate_type = "Roster",
    occurred_at = joined_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// ParticipantLeft
// ════════════════════════════════════════════════════════════════════════════

/// Published when a participant leaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantLeft {
    pub event_id: EventId,
    pub roster_id: RosterId,
    pub participant: ParticipantId,
    pub vacated_slot: Option<String>,
    pub occupancy: usize,
    pub left_at: Timestamp,
}

domain_event!(
    ParticipantLeft,
    event_type = "roster.participant_left.v1",
    schema_version = 1,
    aggregate_id = roster_id,
    aggregate_type = "Roster",
    occurred_at = left_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// ParticipantsAutoAssigned
// ════════════════════════════════════════════════════════════════════════════

/// Published when a solve pass seats one or more flexible participants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantsAutoAssigned {
    pub event_id: EventId,
    pub roster_id: RosterId,
    /// In commit order.
    pub assignments: Vec<AutoAssignment>,
    pub assigned_at: Timestamp,
}

domain_event!(
    ParticipantsAutoAssigned,
    event_type = "roster.participants_auto_assigned.v1",
    schema_version = 1,
    aggregate_id = roster_id,
    aggregate_type = "Roster",
    occurred_at = assigned_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// RosterFilled
// ════════════════════════════════════════════════════════════════════════════

/// Published once each time occupancy reaches capacity.
///
/// Fires again only after someone leaves and the roster fills back up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFilled {
    pub event_id: EventId,
    pub roster_id: RosterId,
    /// Who should be told.
    pub organizer: ParticipantId,
    pub title: String,
    pub capacity: usize,
    pub filled_at: Timestamp,
}

domain_event!(
    RosterFilled,
    event_type = "roster.filled.v1",
    schema_version = 1,
    aggregate_id = roster_id,
    aggregate_type = "Roster",
    occurred_at = filled_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// RosterCancelled
// ════════════════════════════════════════════════════════════════════════════

/// Published when the organizer cancels the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterCancelled {
    pub event_id: EventId,
    pub roster_id: RosterId,
    pub cancelled_by: ParticipantId,
    /// Everyone seated or flexible at the time.
    pub members: Vec<ParticipantId>,
    pub cancelled_at: Timestamp,
}

domain_event!(
    RosterCancelled,
    event_type = "roster.cancelled.v1",
    schema_version = 1,
    aggregate_id = roster_id,
    aggregate_type = "Roster",
    occurred_at = cancelled_at,
    event_id = event_id
);
