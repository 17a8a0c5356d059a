//! JoinSlotHandler - Command handler for taking a specific slot.

use std::sync::Arc;

use super::join::{execute, JoinRosterResult};
use super::RosterLocks;
use crate::domain::foundation::{CommandMetadata, ParticipantId, RosterId};
use crate::domain::roster::{Placement, RosterError};
use crate::ports::{EventPublisher, RosterRepository};

/// Command to take one named slot.
#[derive(Debug, Clone)]
pub struct JoinSlotCommand {
    pub roster_id: RosterId,
    pub participant: ParticipantId,
    pub slot: String,
}

/// Handler for direct slot joins.
pub struct JoinSlotHandler {
    repository: Arc<dyn RosterRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    locks: Arc<RosterLocks>,
}

impl JoinSlotHandler {
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
        cmd: JoinSlotCommand,
        metadata: CommandMetadata,
    ) -> Result<JoinRosterResult, RosterError> {
        execute(
            self.repository.as_ref(),
            self.event_publisher.as_ref(),
            &self.locks,
            cmd.roster_id,
            cmd.participant,
            Placement::Slot(cmd.slot),
            &metadata,
        )
        .await
    }
}
