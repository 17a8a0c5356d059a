//! Roster aggregate entity.
//!
//! A roster is one recruitment instance: a fixed set of named slots from its
//! template, a pool of flexible participants, and the solver that seats them.
//! All mutation goes through `join_slot`, `join_flexible`, `leave` and
//! `cancel`; callers only ever see the roster through `snapshot`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::RosterError;
use super::seating::{AutoAssignment, Removed, Seating};
use super::snapshot::RosterSnapshot;
use super::template::{Acceptable, RosterTemplate, SessionType};
use crate::domain::foundation::{ParticipantId, RosterId, RosterStatus, Timestamp};

/// Maximum length for a roster title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for location and comment text.
pub const MAX_NOTE_LENGTH: usize = 500;

/// What a direct join does when the requested seat is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatPolicy {
    /// The joiner takes the seat. An auto-seated occupant goes back to the
    /// pool; a directly seated occupant leaves the roster.
    #[default]
    Overwrite,
    /// The join fails with `SlotOccupied`.
    Reject,
}

/// Where a participant asked to go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    Slot(String),
    Flexible(Acceptable),
}

/// Descriptive fields supplied by the organizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterDetails {
    pub title: String,
    pub location: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub comment: Option<String>,
}

impl RosterDetails {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    fn validate(&self) -> Result<(), RosterError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(RosterError::invalid_request("title", "Title cannot be empty"));
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(RosterError::invalid_request(
                "title",
                format!("Title must be {} characters or less", MAX_TITLE_LENGTH),
            ));
        }
        for (field, value) in [("location", &self.location), ("comment", &self.comment)] {
            if value.as_ref().map_or(false, |v| v.chars().count() > MAX_NOTE_LENGTH) {
                return Err(RosterError::invalid_request(
                    field,
                    format!("must be {} characters or less", MAX_NOTE_LENGTH),
                ));
            }
        }
        Ok(())
    }
}

/// Result of a successful join.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinOutcome {
    /// Seats the solver filled during this operation.
    pub notes: Vec<AutoAssignment>,
    /// True exactly once per fill: when this join brought occupancy to
    /// capacity and the full latch was not yet set.
    pub just_filled: bool,
    /// Direct occupant pushed out of the roster by a seat overwrite.
    pub displaced: Option<ParticipantId>,
}

/// Result of a successful leave.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveOutcome {
    /// Seat the participant held, if they were seated.
    pub vacated_slot: Option<String>,
    pub notes: Vec<AutoAssignment>,
}

/// Roster aggregate.
///
/// # Invariants
///
/// - slot names are fixed by the template at construction
/// - a participant is seated once, flexible once, or absent
/// - seated + flexible never exceeds capacity
/// - cancelled rosters reject every mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    id: RosterId,
    organizer: ParticipantId,
    template: RosterTemplate,
    seat_policy: SeatPolicy,
    details: RosterDetails,
    status: RosterStatus,
    seating: Seating,
    full_notified: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Roster {
    /// Create an open roster with every slot empty.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` if the title is empty or a text field is too long
    pub fn new(
        id: RosterId,
        organizer: ParticipantId,
        template: RosterTemplate,
        seat_policy: SeatPolicy,
        details: RosterDetails,
    ) -> Result<Self, RosterError> {
        details.validate()?;
        let details = RosterDetails {
            title: details.title.trim().to_string(),
            ..details
        };

        let now = Timestamp::now();
        Ok(Self {
            id,
            organizer,
            seating: Seating::new(&template),
            template,
            seat_policy,
            details,
            status: RosterStatus::Open,
            full_notified: false,
            created_at: now,
            updated_at: now,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &RosterId {
        &self.id
    }

    pub fn organizer(&self) -> &ParticipantId {
        &self.organizer
    }

    pub fn session_type(&self) -> SessionType {
        self.template.session_type()
    }

    pub fn template(&self) -> &RosterTemplate {
        &self.template
    }

    pub fn seat_policy(&self) -> SeatPolicy {
        self.seat_policy
    }

    pub fn details(&self) -> &RosterDetails {
        &self.details
    }

    pub fn status(&self) -> RosterStatus {
        self.status
    }

    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    /// Returns true once the full notification has fired for the current fill.
    pub fn full_notified(&self) -> bool {
        self.full_notified
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn capacity(&self) -> usize {
        self.template.capacity()
    }

    /// Seated plus flexible participants.
    pub fn occupancy_count(&self) -> usize {
        self.seating.occupancy()
    }

    pub fn is_full(&self) -> bool {
        self.occupancy_count() >= self.capacity()
    }

    /// True if seated or flexible.
    pub fn is_member(&self, participant: &ParticipantId) -> bool {
        self.seating.is_member(participant)
    }

    pub fn is_organizer(&self, participant: &ParticipantId) -> bool {
        &self.organizer == participant
    }

    /// Read-only view for presentation.
    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot::of(self)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Seat the organizer right after creation.
    ///
    /// With no explicit placement, open-seating templates put the organizer
    /// in the first seat and role templates leave them out.
    ///
    /// Returns the placement used, or `None` if the organizer was not seated.
    pub fn seat_organizer(
        &mut self,
        placement: Option<Placement>,
    ) -> Result<Option<(Placement, JoinOutcome)>, RosterError> {
        let placement = match placement {
            Some(placement) => placement,
            None if self.template.is_open_seating() => match self.template.slots().first() {
                Some(first) => Placement::Slot(first.clone()),
                None => return Ok(None),
            },
            None => return Ok(None),
        };
        let organizer = self.organizer.clone();
        let outcome = self.join(organizer, placement.clone())?;
        Ok(Some((placement, outcome)))
    }

    /// Join with either placement kind.
    pub fn join(
        &mut self,
        participant: ParticipantId,
        placement: Placement,
    ) -> Result<JoinOutcome, RosterError> {
        match placement {
            Placement::Slot(slot) => self.join_slot(participant, &slot),
            Placement::Flexible(acceptable) => self.join_flexible(participant, acceptable),
        }
    }

    /// Take a specific slot, moving out of any seat or pool entry held.
    ///
    /// # Errors
    ///
    /// - `Cancelled` if the roster is cancelled
    /// - `InvalidRequest` if the slot is not part of the template
    /// - `CapacityExceeded` if a newcomer finds the roster full
    /// - `SlotOccupied` if the seat is taken and the policy is `Reject`
    pub fn join_slot(
        &mut self,
        participant: ParticipantId,
        slot: &str,
    ) -> Result<JoinOutcome, RosterError> {
        self.ensure_mutable()?;
        if !self.template.has_slot(slot) {
            return Err(RosterError::invalid_request(
                "slot",
                format!("'{}' is not a slot of this roster", slot),
            ));
        }
        self.ensure_room_for(&participant)?;
        if self.seat_policy == SeatPolicy::Reject {
            if let Some(occupant) = self.seating.occupant(slot) {
                if occupant != &participant {
                    return Err(RosterError::slot_occupied(slot, occupant.clone()));
                }
            }
        }

        self.seating.remove(&participant);
        let previous = self.seating.seat(slot, participant.clone());
        let displaced = previous.filter(|p| p != &participant && !self.seating.is_auto_assigned(p));
        debug!(roster_id = %self.id, %participant, slot, "participant took slot");

        let notes = self.seating.solve(&self.template);
        let just_filled = self.settle_full_latch();
        self.touch();
        Ok(JoinOutcome {
            notes,
            just_filled,
            displaced,
        })
    }

    /// Declare a set of acceptable slots and wait in the pool.
    ///
    /// Re-declaring moves the participant to the back of the pool.
    ///
    /// # Errors
    ///
    /// - `Cancelled` if the roster is cancelled
    /// - `InvalidRequest` if the declaration is empty or names something the
    ///   template doesn't know
    /// - `CapacityExceeded` if a newcomer finds the roster full
    pub fn join_flexible(
        &mut self,
        participant: ParticipantId,
        acceptable: Acceptable,
    ) -> Result<JoinOutcome, RosterError> {
        self.ensure_mutable()?;
        self.validate_acceptable(&acceptable)?;
        self.ensure_room_for(&participant)?;

        self.seating.remove(&participant);
        debug!(roster_id = %self.id, %participant, %acceptable, "participant joined pool");
        self.seating.add_flexible(participant, acceptable);

        let notes = self.seating.solve(&self.template);
        let just_filled = self.settle_full_latch();
        self.touch();
        Ok(JoinOutcome {
            notes,
            just_filled,
            displaced: None,
        })
    }

    /// Leave the roster entirely.
    ///
    /// # Errors
    ///
    /// - `Cancelled` if the roster is cancelled
    /// - `NotAMember` if the participant holds nothing
    pub fn leave(&mut self, participant: &ParticipantId) -> Result<LeaveOutcome, RosterError> {
        self.ensure_mutable()?;
        let removed = self
            .seating
            .remove(participant)
            .ok_or_else(|| RosterError::not_a_member(participant.clone()))?;

        self.full_notified = false;
        let notes = self.seating.solve(&self.template);
        self.settle_full_latch();
        self.touch();
        Ok(LeaveOutcome {
            vacated_slot: match removed {
                Removed::Seat(slot) => Some(slot),
                Removed::Flexible(_) => None,
            },
            notes,
        })
    }

    /// Close recruitment. Only the organizer may cancel.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if `requester` is not the organizer
    /// - `Cancelled` if already cancelled
    pub fn cancel(&mut self, requester: &ParticipantId) -> Result<(), RosterError> {
        if !self.is_organizer(requester) {
            return Err(RosterError::forbidden());
        }
        if !self.status.can_transition_to(&RosterStatus::Cancelled) {
            return Err(RosterError::cancelled());
        }
        self.status = RosterStatus::Cancelled;
        self.touch();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_mutable(&self) -> Result<(), RosterError> {
        if self.status.is_mutable() {
            Ok(())
        } else {
            Err(RosterError::cancelled())
        }
    }

    fn ensure_room_for(&self, participant: &ParticipantId) -> Result<(), RosterError> {
        if !self.is_member(participant) && self.is_full() {
            return Err(RosterError::capacity_exceeded(self.capacity()));
        }
        Ok(())
    }

    fn validate_acceptable(&self, acceptable: &Acceptable) -> Result<(), RosterError> {
        match acceptable {
            Acceptable::Any => Ok(()),
            Acceptable::Roles(roles) if roles.is_empty() => Err(RosterError::invalid_request(
                "acceptable",
                "At least one role is required",
            )),
            Acceptable::Roles(roles) => match roles.iter().find(|r| !self.template.recognizes(r)) {
                Some(unknown) => Err(RosterError::invalid_request(
                    "acceptable",
                    format!("'{}' is not a role of this roster", unknown),
                )),
                None => Ok(()),
            },
        }
    }

    /// Sets the latch when capacity is reached and clears it below capacity.
    /// Returns true only on the transition to set.
    fn settle_full_latch(&mut self) -> bool {
        if !self.is_full() {
            self.full_notified = false;
            return false;
        }
        let just_filled = !self.full_notified;
        self.full_notified = true;
        just_filled
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
