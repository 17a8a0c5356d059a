//! Shared join flow for the slot and flexible join handlers.

use tracing::{debug, info, warn};

use super::roster_events::{join_envelopes, load, publish};
use super::RosterLocks;
use crate::domain::foundation::{CommandMetadata, ParticipantId, RosterId};
use crate::domain::roster::{JoinOutcome, Placement, RosterError, RosterSnapshot};
use crate::ports::{EventPublisher, RosterRepository};

/// Result of a successful join.
#[derive(Debug, Clone)]
pub struct JoinRosterResult {
    pub roster: RosterSnapshot,
    pub outcome: JoinOutcome,
}

pub(super) async fn execute(
    repository: &dyn RosterRepository,
    event_publisher: &dyn EventPublisher,
    locks: &RosterLocks,
    roster_id: RosterId,
    participant: ParticipantId,
    placement: Placement,
    metadata: &CommandMetadata,
) -> Result<JoinRosterResult, RosterError> {
    debug!(%roster_id, %participant, ?placement, "join requested");
    let _guard = locks.acquire(roster_id).await;

    let mut roster = load(repository, &roster_id).await?;
    let outcome = roster
        .join(participant.clone(), placement.clone())
        .map_err(|e| {
            warn!(%roster_id, %participant, code = %e.code(), "join rejected");
            e
        })?;

    let envelopes = join_envelopes(&roster, &participant, placement, &outcome)?;
    repository.update(&roster).await?;
    publish(event_publisher, envelopes, metadata, &participant).await;

    for note in &outcome.notes {
        debug!(%roster_id, %note, "auto-assigned");
    }
    if outcome.just_filled {
        info!(%roster_id, organizer = %roster.organizer(), "roster is full");
    }
    Ok(JoinRosterResult {
        roster: roster.snapshot(),
        outcome,
    })
}
