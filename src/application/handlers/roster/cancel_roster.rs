//! CancelRosterHandler - Command handler for closing recruitment.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::roster_events::{load, publish};
use super::RosterLocks;
use crate::domain::foundation::{
    CommandMetadata, EventId, ParticipantId, RosterId, SerializableDomainEvent,
};
use crate::domain::roster::{RosterCancelled, RosterError, RosterSnapshot};
use crate::ports::{EventPublisher, RosterRepository};

/// Command to cancel a roster.
#[derive(Debug, Clone)]
pub struct CancelRosterCommand {
    pub roster_id: RosterId,
    pub requester: ParticipantId,
}

/// Result of a successful cancel.
#[derive(Debug, Clone)]
pub struct CancelRosterResult {
    pub roster: RosterSnapshot,
    pub event: RosterCancelled,
}

/// Handler for cancelling rosters.
pub struct CancelRosterHandler {
    repository: Arc<dyn RosterRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    locks: Arc<RosterLocks>,
}

impl CancelRosterHandler {
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
        cmd: CancelRosterCommand,
        metadata: CommandMetadata,
    ) -> Result<CancelRosterResult, RosterError> {
        let roster_id = cmd.roster_id;
        debug!(%roster_id, requester = %cmd.requester, "cancel requested");
        let _guard = self.locks.acquire(roster_id).await;

        let mut roster = load(self.repository.as_ref(), &roster_id).await?;
        roster.cancel(&cmd.requester).map_err(|e| {
            warn!(%roster_id, requester = %cmd.requester, code = %e.code(), "cancel rejected");
            e
        })?;

        let event = RosterCancelled {
            event_id: EventId::new(),
            roster_id,
            cancelled_by: cmd.requester.clone(),
            members: roster.seating().members(),
            cancelled_at: *roster.updated_at(),
        };
        let envelope = event.to_envelope()?;
        self.repository.update(&roster).await?;

        publish(
            self.event_publisher.as_ref(),
            vec![envelope],
            &metadata,
            &cmd.requester,
        )
        .await;

        info!(%roster_id, members = event.members.len(), "roster cancelled");
        Ok(CancelRosterResult {
            roster: roster.snapshot(),
            event,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::roster::test_support::*;
    use crate::domain::foundation::RosterStatus;

    fn handler(
        repo: Arc<MockRosterRepository>,
        publisher: Arc<MockEventPublisher>,
    ) -> CancelRosterHandler {
        CancelRosterHandler::new(repo, publisher, Arc::new(RosterLocks::new()))
    }

    #[tokio::test]
    async fn organizer_cancels_and_members_are_listed() {
        let mut roster = light_roster();
        roster.join_slot(pid("A"), "Tank").unwrap();
        let id = *roster.id();
        let repo = Arc::new(MockRosterRepository::with(roster));
        let publisher = Arc::new(MockEventPublisher::new());

        let result = handler(repo.clone(), publisher.clone())
            .handle(
                CancelRosterCommand {
                    roster_id: id,
                    requester: pid("Organizer"),
                },
                test_metadata(),
            )
            .await
            .unwrap();

        assert_eq!(result.roster.status, RosterStatus::Cancelled);
        assert_eq!(result.event.members, vec![pid("A")]);
        assert_eq!(publisher.event_types(), vec!["roster.cancelled.v1"]);
        assert_eq!(repo.stored(&id).unwrap().status(), RosterStatus::Cancelled);
    }

    #[tokio::test]
    async fn non_organizer_is_forbidden() {
        let roster = light_roster();
        let id = *roster.id();
        let repo = Arc::new(MockRosterRepository::with(roster));
        let publisher = Arc::new(MockEventPublisher::new());

        let result = handler(repo.clone(), publisher.clone())
            .handle(
                CancelRosterCommand {
                    roster_id: id,
                    requester: pid("A"),
                },
                test_metadata(),
            )
            .await;

        assert_eq!(result.unwrap_err(), RosterError::Forbidden);
        assert_eq!(repo.stored(&id).unwrap().status(), RosterStatus::Open);
        assert!(publisher.published_events().is_empty());
    }
}
