//! JoinFlexibleHandler - Command handler for joining the flexible pool.

use std::sync::Arc;

use super::join::{execute, JoinRosterResult};
use super::RosterLocks;
use crate::domain::foundation::{CommandMetadata, ParticipantId, RosterId};
use crate::domain::roster::{Acceptable, Placement, RosterError};
use crate::ports::{EventPublisher, RosterRepository};

/// Command to declare acceptable slots.
#[derive(Debug, Clone)]
pub struct JoinFlexibleCommand {
    pub roster_id: RosterId,
    pub participant: ParticipantId,
    pub acceptable: Acceptable,
}

/// Handler for flexible joins.
pub struct JoinFlexibleHandler {
    repository: Arc<dyn RosterRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    locks: Arc<RosterLocks>,
}

impl JoinFlexibleHandler {
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
        cmd: JoinFlexibleCommand,
        metadata: CommandMetadata,
    ) -> Result<JoinRosterResult, RosterError> {
        execute(
            self.repository.as_ref(),
            self.event_publisher.as_ref(),
            &self.locks,
            cmd.roster_id,
            cmd.participant,
            Placement::Flexible(cmd.acceptable),
            &metadata,
        )
        .await
    }
}
