//! In-Memory Roster Repository
//!
//! Keeps rosters in a map behind an async lock. State is lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, RosterId};
use crate::domain::roster::Roster;
use crate::ports::RosterRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryRosterRepository {
    rosters: Arc<RwLock<HashMap<RosterId, Roster>>>,
}

impl InMemoryRosterRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: &RosterId) -> DomainError {
    DomainError::new(ErrorCode::RosterNotFound, format!("Roster not found: {}", id))
}

#[async_trait]
impl RosterRepository for InMemoryRosterRepository {
    async fn save(&self, roster: &Roster) -> Result<(), DomainError> {
        self.rosters.write().await.insert(*roster.id(), roster.clone());
        Ok(())
    }

    async fn update(&self, roster: &Roster) -> Result<(), DomainError> {
        let mut rosters = self.rosters.write().await;
        match rosters.get_mut(roster.id()) {
            Some(stored) => {
                *stored = roster.clone();
                Ok(())
            }
            None => Err(not_found(roster.id())),
        }
    }

    async fn find_by_id(&self, id: &RosterId) -> Result<Option<Roster>, DomainError> {
        Ok(self.rosters.read().await.get(id).cloned())
    }

    async fn find_open(&self) -> Result<Vec<Roster>, DomainError> {
        let mut open: Vec<Roster> = self
            .rosters
            .read()
            .await
            .values()
            .filter(|r| r.status().is_mutable())
            .cloned()
            .collect();
        open.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ParticipantId;
    use crate::domain::roster::{RosterDetails, RosterTemplate, SeatPolicy, SessionType};

    fn organizer() -> ParticipantId {
        ParticipantId::new("Organizer").unwrap()
    }

    fn test_roster(title: &str) -> Roster {
        Roster::new(
            RosterId::new(),
            organizer(),
            RosterTemplate::builtin(SessionType::Light).unwrap().clone(),
            SeatPolicy::Overwrite,
            RosterDetails::titled(title),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn save_and_find_by_id() {
        let repo = InMemoryRosterRepository::new();
        let roster = test_roster("Raid");

        repo.save(&roster).await.unwrap();

        let found = repo.find_by_id(roster.id()).await.unwrap();
        assert_eq!(found, Some(roster));
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown() {
        let repo = InMemoryRosterRepository::new();
        assert!(repo.find_by_id(&RosterId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_replaces_stored_roster() {
        let repo = InMemoryRosterRepository::new();
        let mut roster = test_roster("Raid");
        repo.save(&roster).await.unwrap();

        roster
            .join_slot(ParticipantId::new("A").unwrap(), "Tank")
            .unwrap();
        repo.update(&roster).await.unwrap();

        let found = repo.find_by_id(roster.id()).await.unwrap().unwrap();
        assert_eq!(found.occupancy_count(), 1);
    }

    #[tokio::test]
    async fn update_unknown_roster_fails() {
        let repo = InMemoryRosterRepository::new();
        let err = repo.update(&test_roster("Raid")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RosterNotFound);
    }

    #[tokio::test]
    async fn find_open_skips_cancelled() {
        let repo = InMemoryRosterRepository::new();
        let open = test_roster("Open");
        let mut cancelled = test_roster("Cancelled");
        cancelled.cancel(&organizer()).unwrap();
        repo.save(&open).await.unwrap();
        repo.save(&cancelled).await.unwrap();

        let found = repo.find_open().await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), open.id());
    }
}
