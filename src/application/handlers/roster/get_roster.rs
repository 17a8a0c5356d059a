//! GetRosterHandler - Query handler for a roster snapshot.

use std::sync::Arc;

use super::roster_events::load;
use crate::domain::foundation::RosterId;
use crate::domain::roster::{RosterError, RosterSnapshot};
use crate::ports::RosterRepository;

/// Query to get a roster by ID.
#[derive(Debug, Clone)]
pub struct GetRosterQuery {
    pub roster_id: RosterId,
}

/// Handler for retrieving one roster.
pub struct GetRosterHandler {
    repository: Arc<dyn RosterRepository>,
}

impl GetRosterHandler {
    pub fn new(repository: Arc<dyn RosterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetRosterQuery) -> Result<RosterSnapshot, RosterError> {
        let roster = load(self.repository.as_ref(), &query.roster_id).await?;
        Ok(roster.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::roster::test_support::*;

    #[tokio::test]
    async fn returns_snapshot_of_stored_roster() {
        let mut roster = light_roster();
        roster.join_slot(pid("A"), "Tank").unwrap();
        let id = *roster.id();
        let handler = GetRosterHandler::new(Arc::new(MockRosterRepository::with(roster)));

        let snapshot = handler.handle(GetRosterQuery { roster_id: id }).await.unwrap();

        assert_eq!(snapshot.id, id);
        assert_eq!(snapshot.slots[0].occupant, Some(pid("A")));
    }

    #[tokio::test]
    async fn missing_roster_is_not_found() {
        let handler = GetRosterHandler::new(Arc::new(MockRosterRepository::new()));
        let id = RosterId::new();

        let result = handler.handle(GetRosterQuery { roster_id: id }).await;

        assert_eq!(result.unwrap_err(), RosterError::not_found(id));
    }
}
