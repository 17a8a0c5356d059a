//! Mocks shared by the roster handler tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{
    CommandMetadata, DomainError, ErrorCode, EventEnvelope, ParticipantId, RosterId,
};
use crate::domain::roster::{Roster, RosterDetails, RosterTemplate, SeatPolicy, SessionType};
use crate::ports::{EventPublisher, RosterRepository};

pub struct MockRosterRepository {
    rosters: Mutex<HashMap<RosterId, Roster>>,
    fail_writes: bool,
}

impl MockRosterRepository {
    pub fn new() -> Self {
        Self {
            rosters: Mutex::new(HashMap::new()),
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            rosters: Mutex::new(HashMap::new()),
            fail_writes: true,
        }
    }

    pub fn with(roster: Roster) -> Self {
        let repo = Self::new();
        repo.rosters.lock().unwrap().insert(*roster.id(), roster);
        repo
    }

    pub fn stored(&self, id: &RosterId) -> Option<Roster> {
        self.rosters.lock().unwrap().get(id).cloned()
    }

    pub fn count(&self) -> usize {
        self.rosters.lock().unwrap().len()
    }

    fn write(&self, roster: &Roster) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                "Simulated write failure",
            ));
        }
        self.rosters
            .lock()
            .unwrap()
            .insert(*roster.id(), roster.clone());
        Ok(())
    }
}

#[async_trait]
impl RosterRepository for MockRosterRepository {
    async fn save(&self, roster: &Roster) -> Result<(), DomainError> {
        self.write(roster)
    }

    async fn update(&self, roster: &Roster) -> Result<(), DomainError> {
        self.write(roster)
    }

    async fn find_by_id(&self, id: &RosterId) -> Result<Option<Roster>, DomainError> {
        Ok(self.stored(id))
    }

    async fn find_open(&self) -> Result<Vec<Roster>, DomainError> {
        Ok(self
            .rosters
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.status().is_mutable())
            .cloned()
            .collect())
    }
}

pub struct MockEventPublisher {
    published_events: Mutex<Vec<EventEnvelope>>,
    fail_publish: bool,
}

impl MockEventPublisher {
    pub fn new() -> Self {
        Self {
            published_events: Mutex::new(Vec::new()),
            fail_publish: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            published_events: Mutex::new(Vec::new()),
            fail_publish: true,
        }
    }

    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published_events.lock().unwrap().clone()
    }

    pub fn event_types(&self) -> Vec<String> {
        self.published_events()
            .into_iter()
            .map(|e| e.event_type)
            .collect()
    }
}

#[async_trait]
impl EventPublisher for MockEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if self.fail_publish {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                "Simulated publish failure",
            ));
        }
        self.published_events.lock().unwrap().push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

pub fn pid(name: &str) -> ParticipantId {
    ParticipantId::new(name).unwrap()
}

pub fn light_roster() -> Roster {
    Roster::new(
        RosterId::new(),
        pid("Organizer"),
        RosterTemplate::builtin(SessionType::Light).unwrap().clone(),
        SeatPolicy::Overwrite,
        RosterDetails::titled("Weekly raid"),
    )
    .unwrap()
}

pub fn test_metadata() -> CommandMetadata {
    CommandMetadata::test_fixture()
}
