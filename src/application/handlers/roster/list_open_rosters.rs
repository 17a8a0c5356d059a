//! ListOpenRostersHandler - Query handler for rosters still recruiting.

use std::sync::Arc;

use crate::domain::roster::{RosterError, RosterSnapshot, SessionType};
use crate::ports::RosterRepository;

/// Query for open rosters, optionally of one session type.
#[derive(Debug, Clone, Default)]
pub struct ListOpenRostersQuery {
    pub session_type: Option<SessionType>,
    /// Skip rosters with no empty slot.
    pub with_vacancies_only: bool,
}

/// Handler for listing open rosters.
pub struct ListOpenRostersHandler {
    repository: Arc<dyn RosterRepository>,
}

impl ListOpenRostersHandler {
    pub fn new(repository: Arc<dyn RosterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListOpenRostersQuery,
    ) -> Result<Vec<RosterSnapshot>, RosterError> {
        let rosters = self.repository.find_open().await?;
        Ok(rosters
            .iter()
            .filter(|r| query.session_type.map_or(true, |t| r.session_type() == t))
            .filter(|r| !query.with_vacancies_only || !r.is_full())
            .map(|r| r.snapshot())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::roster::test_support::*;
    use crate::domain::foundation::RosterId;
    use crate::domain::roster::{Roster, RosterDetails, RosterTemplate, SeatPolicy};
    use crate::ports::RosterRepository as _;

    fn full_roster() -> Roster {
        Roster::new(
            RosterId::new(),
            pid("Organizer"),
            RosterTemplate::builtin(SessionType::Full).unwrap().clone(),
            SeatPolicy::Overwrite,
            RosterDetails::titled("Savage"),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn filters_by_session_type() {
        let repo = Arc::new(MockRosterRepository::with(light_roster()));
        repo.save(&full_roster()).await.unwrap();
        let handler = ListOpenRostersHandler::new(repo);

        let all = handler.handle(ListOpenRostersQuery::default()).await.unwrap();
        let full_only = handler
            .handle(ListOpenRostersQuery {
                session_type: Some(SessionType::Full),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(full_only.len(), 1);
        assert_eq!(full_only[0].session_type, SessionType::Full);
    }

    #[tokio::test]
    async fn vacancies_filter_hides_full_rosters() {
        let mut roster = light_roster();
        for (name, slot) in [("A", "Tank"), ("B", "Healer"), ("C", "DPS1"), ("D", "DPS2")] {
            roster.join_slot(pid(name), slot).unwrap();
        }
        let repo = Arc::new(MockRosterRepository::with(roster));
        let handler = ListOpenRostersHandler::new(repo);

        let result = handler
            .handle(ListOpenRostersQuery {
                with_vacancies_only: true,
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(result.is_empty());
    }
}
