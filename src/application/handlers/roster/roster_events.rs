//! Shared load and publish steps for roster handlers.
//!
//! Handlers save first and publish second. Once the save succeeds the
//! change is committed, so a failed publish is logged and the command still
//! succeeds. A request dropped between the two steps loses its events.

use tracing::error;

use crate::domain::foundation::{
    CommandMetadata, DomainError, EventEnvelope, EventId, ParticipantId, RosterId,
    SerializableDomainEvent, Timestamp,
};
use crate::domain::roster::{
    AutoAssignment, JoinOutcome, LeaveOutcome, ParticipantJoined, ParticipantLeft,
    ParticipantsAutoAssigned, Placement, Roster, RosterError, RosterFilled,
};
use crate::ports::{EventPublisher, RosterRepository};

pub(super) async fn load(
    repository: &dyn RosterRepository,
    id: &RosterId,
) -> Result<Roster, RosterError> {
    repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| RosterError::not_found(*id))
}

/// Envelopes for a successful join, in the order they happened.
pub(super) fn join_envelopes(
    roster: &Roster,
    participant: &ParticipantId,
    placement: Placement,
    outcome: &JoinOutcome,
) -> Result<Vec<EventEnvelope>, DomainError> {
    let now = *roster.updated_at();
    let mut envelopes = vec![ParticipantJoined {
        event_id: EventId::new(),
        roster_id: *roster.id(),
        participant: participant.clone(),
        placement,
        displaced: outcome.displaced.clone(),
        occupancy: roster.occupancy_count(),
        joined_at: now,
    }
    .to_envelope()?];
    envelopes.extend(auto_assigned_envelope(roster, &outcome.notes, now)?);
    if outcome.just_filled {
        envelopes.push(filled_envelope(roster, now)?);
    }
    Ok(envelopes)
}

/// Envelopes for a successful leave.
pub(super) fn leave_envelopes(
    roster: &Roster,
    participant: &ParticipantId,
    outcome: &LeaveOutcome,
) -> Result<Vec<EventEnvelope>, DomainError> {
    let now = *roster.updated_at();
    let mut envelopes = vec![ParticipantLeft {
        event_id: EventId::new(),
        roster_id: *roster.id(),
        participant: participant.clone(),
        vacated_slot: outcome.vacated_slot.clone(),
        occupancy: roster.occupancy_count(),
        left_at: now,
    }
    .to_envelope()?];
    envelopes.extend(auto_assigned_envelope(roster, &outcome.notes, now)?);
    Ok(envelopes)
}

fn auto_assigned_envelope(
    roster: &Roster,
    notes: &[AutoAssignment],
    at: Timestamp,
) -> Result<Option<EventEnvelope>, DomainError> {
    if notes.is_empty() {
        return Ok(None);
    }
    ParticipantsAutoAssigned {
        event_id: EventId::new(),
        roster_id: *roster.id(),
        assignments: notes.to_vec(),
        assigned_at: at,
    }
    .to_envelope()
    .map(Some)
}

fn filled_envelope(roster: &Roster, at: Timestamp) -> Result<EventEnvelope, DomainError> {
    RosterFilled {
        event_id: EventId::new(),
        roster_id: *roster.id(),
        organizer: roster.organizer().clone(),
        title: roster.details().title.clone(),
        capacity: roster.capacity(),
        filled_at: at,
    }
    .to_envelope()
}

/// Stamps request context on each envelope and publishes them in order.
pub(super) async fn publish(
    publisher: &dyn EventPublisher,
    envelopes: Vec<EventEnvelope>,
    metadata: &CommandMetadata,
    actor: &ParticipantId,
) {
    let correlation_id = metadata.correlation_id();
    let event_types: Vec<String> = envelopes.iter().map(|e| e.event_type.clone()).collect();
    let stamped = envelopes
        .into_iter()
        .map(|envelope| {
            let envelope = envelope
                .with_correlation_id(correlation_id.clone())
                .with_participant(actor.as_str());
            match metadata.source() {
                Some(source) => envelope.with_source(source),
                None => envelope,
            }
        })
        .collect();
    if let Err(e) = publisher.publish_all(stamped).await {
        error!(
            ?event_types,
            %correlation_id,
            error = %e,
            "failed to publish events for a committed roster change"
        );
    }
}
