//! Roster repository port.
//!
//! Defines the contract for persisting and retrieving `Roster` aggregates.
//! Handlers call it after every successful mutation; a roster is always
//! stored whole.

use crate::domain::foundation::{DomainError, RosterId};
use crate::domain::roster::Roster;
use async_trait::async_trait;

/// Repository port for Roster aggregate persistence.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Save a new roster.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, roster: &Roster) -> Result<(), DomainError>;

    /// Update an existing roster.
    ///
    /// # Errors
    ///
    /// - `RosterNotFound` if the roster doesn't exist
    /// - `StorageError` on persistence failure
    async fn update(&self, roster: &Roster) -> Result<(), DomainError>;

    /// Find a roster by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &RosterId) -> Result<Option<Roster>, DomainError>;

    /// All rosters still accepting participants, newest first.
    async fn find_open(&self) -> Result<Vec<Roster>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn RosterRepository) {}
    }
}
