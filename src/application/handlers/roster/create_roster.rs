//! CreateRosterHandler - Command handler for opening a roster.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::roster_events::{join_envelopes, publish};
use crate::domain::foundation::{
    CommandMetadata, EventId, ParticipantId, RosterId, SerializableDomainEvent,
};
use crate::domain::roster::{
    JoinOutcome, Placement, Roster, RosterCreated, RosterDetails, RosterError, SeatPolicy,
    SessionType, TemplateCatalog,
};
use crate::ports::{EventPublisher, RosterRepository};

/// Command to open a roster.
#[derive(Debug, Clone)]
pub struct CreateRosterCommand {
    pub organizer: ParticipantId,
    pub session_type: SessionType,
    pub details: RosterDetails,
    /// Where the organizer sits. `None` seats them in the first seat of an
    /// open-seating template and nowhere otherwise.
    pub organizer_placement: Option<Placement>,
}

/// Result of successful roster creation.
#[derive(Debug, Clone)]
pub struct CreateRosterResult {
    pub roster: Roster,
    pub event: RosterCreated,
    /// Outcome of seating the organizer, if they were seated.
    pub organizer_outcome: Option<JoinOutcome>,
}

/// Handler for opening rosters.
pub struct CreateRosterHandler {
    repository: Arc<dyn RosterRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    catalog: TemplateCatalog,
    seat_policy: SeatPolicy,
}

impl CreateRosterHandler {
    pub fn new(
        repository: Arc<dyn RosterRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        catalog: TemplateCatalog,
        seat_policy: SeatPolicy,
    ) -> Self {
        Self {
            repository,
            event_publisher,
            catalog,
            seat_policy,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateRosterCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateRosterResult, RosterError> {
        debug!(organizer = %cmd.organizer, session_type = %cmd.session_type, "create requested");
        let template = self.catalog.resolve(cmd.session_type).ok_or_else(|| {
            warn!(session_type = %cmd.session_type, "no template configured");
            RosterError::invalid_request("session_type", "No custom template is configured")
        })?;

        let mut roster = Roster::new(
            RosterId::new(),
            cmd.organizer.clone(),
            template,
            self.seat_policy,
            cmd.details,
        )?;
        let seated = roster.seat_organizer(cmd.organizer_placement)?;

        let event = RosterCreated {
            event_id: EventId::new(),
            roster_id: *roster.id(),
            organizer: cmd.organizer.clone(),
            session_type: roster.session_type(),
            title: roster.details().title.clone(),
            capacity: roster.capacity(),
            created_at: *roster.created_at(),
        };
        let mut envelopes = vec![event.to_envelope()?];
        let organizer_outcome = match seated {
            Some((placement, outcome)) => {
                envelopes.extend(join_envelopes(&roster, &cmd.organizer, placement, &outcome)?);
                Some(outcome)
            }
            None => None,
        };
        self.repository.save(&roster).await?;

        publish(
            self.event_publisher.as_ref(),
            envelopes,
            &metadata,
            &cmd.organizer,
        )
        .await;

        info!(
            roster_id = %roster.id(),
            organizer = %cmd.organizer,
            session_type = %roster.session_type(),
            "roster opened"
        );
        Ok(CreateRosterResult {
            roster,
            event,
            organizer_outcome,
        })
    }
}
