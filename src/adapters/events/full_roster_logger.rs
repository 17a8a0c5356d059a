//! Logs the one-shot "roster is full" notification for the organizer.

use async_trait::async_trait;
use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::domain::roster::RosterFilled;
use crate::ports::EventHandler;

/// Event type this handler expects.
pub const ROSTER_FILLED: &str = "roster.filled.v1";

/// Delivers `RosterFilled` to the organizer through the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct FullRosterLogger;

#[async_trait]
impl EventHandler for FullRosterLogger {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let filled: RosterFilled = event.payload_as().map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Malformed {} payload: {}", ROSTER_FILLED, e),
            )
        })?;
        info!(
            roster_id = %filled.roster_id,
            organizer = %filled.organizer,
            capacity = filled.capacity,
            "roster '{}' is full",
            filled.title
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "FullRosterLogger"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{
        EventId, ParticipantId, RosterId, SerializableDomainEvent, Timestamp,
    };

    #[tokio::test]
    async fn accepts_filled_event() {
        let event = RosterFilled {
            event_id: EventId::new(),
            roster_id: RosterId::new(),
            organizer: ParticipantId::new("Organizer").unwrap(),
            title: "Weekly raid".to_string(),
            capacity: 4,
            filled_at: Timestamp::now(),
        };

        let result = FullRosterLogger.handle(event.to_envelope().unwrap()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn rejects_foreign_payload() {
        let mut envelope = RosterFilled {
            event_id: EventId::new(),
            roster_id: RosterId::new(),
            organizer: ParticipantId::new("Organizer").unwrap(),
            title: "Weekly raid".to_string(),
            capacity: 4,
            filled_at: Timestamp::now(),
        }
        .to_envelope()
        .unwrap();
        envelope.payload = serde_json::json!({"unexpected": true});

        let err = FullRosterLogger.handle(envelope).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::InternalError);
    }
}
