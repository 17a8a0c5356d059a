//! LeaveRosterHandler - Command handler for leaving a roster.

use std::sync::Arc;
use tracing::{debug, warn};

use super::roster_events::{leave_envelopes, load, publish};
use super::RosterLocks;
use crate::domain::foundation::{CommandMetadata, ParticipantId, RosterId};
use crate::domain::roster::{LeaveOutcome, RosterError, RosterSnapshot};
use crate::ports::{EventPublisher, RosterRepository};

/// Command to leave a roster.
#[derive(Debug, Clone)]
pub struct LeaveRosterCommand {
    pub roster_id: RosterId,
    pub participant: ParticipantId,
}

/// Result of a successful leave.
#[derive(Debug, Clone)]
pub struct LeaveRosterResult {
    pub roster: RosterSnapshot,
    pub outcome: LeaveOutcome,
}

/// Handler for leaving rosters.
pub struct LeaveRosterHandler {
    repository: Arc<dyn RosterRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    locks: Arc<RosterLocks>,
}

impl LeaveRosterHandler {
    pub fn new(
        repository: Arc<dyn RosterRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        locks: Arc<RosterLocks>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
            locks,
        }
    }

    pub async fn handle(
        &self,
        cmd: LeaveRosterCommand,
        metadata: CommandMetadata,
    ) -> Result<LeaveRosterResult, RosterError> {
        let roster_id = cmd.roster_id;
        let participant = cmd.participant;
        debug!(%roster_id, %participant, "leave requested");
        let _guard = self.locks.acquire(roster_id).await;

        let mut roster = load(self.repository.as_ref(), &roster_id).await?;
        let outcome = roster.leave(&participant).map_err(|e| {
            warn!(%roster_id, %participant, code = %e.code(), "leave rejected");
            e
        })?;

        let envelopes = leave_envelopes(&roster, &participant, &outcome)?;
        self.repository.update(&roster).await?;
        publish(
            self.event_publisher.as_ref(),
            envelopes,
            &metadata,
            &participant,
        )
        .await;

        Ok(LeaveRosterResult {
            roster: roster.snapshot(),
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::roster::test_support::*;
    use crate::domain::roster::Acceptable;

    fn handler(
        repo: Arc<MockRosterRepository>,
        publisher: Arc<MockEventPublisher>,
    ) -> LeaveRosterHandler {
        LeaveRosterHandler::new(repo, publisher, Arc::new(RosterLocks::new()))
    }

    fn leave(roster_id: RosterId, name: &str) -> LeaveRosterCommand {
        LeaveRosterCommand {
            roster_id,
            participant: pid(name),
        }
    }

    #[tokio::test]
    async fn leaving_frees_seat_for_waiting_participant() {
        let mut roster = light_roster();
        roster.join_slot(pid("C"), "Tank").unwrap();
        roster.join_slot(pid("H"), "Healer").unwrap();
        roster
            .join_flexible(pid("A"), Acceptable::roles(["Tank", "Healer"]))
            .unwrap();
        let id = *roster.id();
        let repo = Arc::new(MockRosterRepository::with(roster));
        let publisher = Arc::new(MockEventPublisher::new());

        let result = handler(repo.clone(), publisher.clone())
            .handle(leave(id, "H"), test_metadata())
            .await
            .unwrap();

        assert_eq!(result.outcome.vacated_slot.as_deref(), Some("Healer"));
        assert_eq!(result.outcome.notes[0].to_string(), "A → Healer");
        assert_eq!(
            publisher.event_types(),
            vec![
                "roster.participant_left.v1",
                "roster.participants_auto_assigned.v1"
            ]
        );
        assert!(!repo.stored(&id).unwrap().is_member(&pid("H")));
    }

    #[tokio::test]
    async fn stranger_gets_not_a_member() {
        let roster = light_roster();
        let id = *roster.id();
        let repo = Arc::new(MockRosterRepository::with(roster));
        let publisher = Arc::new(MockEventPublisher::new());

        let result = handler(repo, publisher.clone())
            .handle(leave(id, "Nobody"), test_metadata())
            .await;

        assert_eq!(result.unwrap_err(), RosterError::not_a_member(pid("Nobody")));
        assert!(publisher.published_events().is_empty());
    }

    #[tokio::test]
    async fn leaving_full_roster_resets_latch() {
        let mut roster = light_roster();
        for (name, slot) in [("A", "Tank"), ("B", "Healer"), ("C", "DPS1"), ("D", "DPS2")] {
            roster.join_slot(pid(name), slot).unwrap();
        }
        assert!(roster.full_notified());
        let id = *roster.id();
        let repo = Arc::new(MockRosterRepository::with(roster));
        let publisher = Arc::new(MockEventPublisher::new());

        handler(repo.clone(), publisher)
            .handle(leave(id, "D"), test_metadata())
            .await
            .unwrap();

        assert!(!repo.stored(&id).unwrap().full_notified());
    }
}
