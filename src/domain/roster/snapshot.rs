//! Read-only roster view for presentation.

use serde::{Deserialize, Serialize};

use super::aggregate::Roster;
use super::template::{Acceptable, RosterTemplate, SessionType};
use crate::domain::foundation::{ParticipantId, RosterId, RosterStatus, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    pub name: String,
    pub occupant: Option<ParticipantId>,
    /// True if the solver seated the occupant.
    pub auto_assigned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlexibleView {
    pub participant: ParticipantId,
    pub declared: Acceptable,
    /// Declared roles that still map to an empty slot. `Any` stays `Any`.
    pub open: Acceptable,
}

/// Point-in-time copy of a roster. Changing it never touches the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    pub id: RosterId,
    pub session_type: SessionType,
    pub organizer: ParticipantId,
    pub title: String,
    pub location: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub comment: Option<String>,
    pub status: RosterStatus,
    pub capacity: usize,
    pub occupancy: usize,
    pub slots: Vec<SlotView>,
    pub flexible: Vec<FlexibleView>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl RosterSnapshot {
    pub(super) fn of(roster: &Roster) -> Self {
        let seating = roster.seating();
        let empty = seating.empty_slots();
        let details = roster.details();

        Self {
            id: *roster.id(),
            session_type: roster.session_type(),
            organizer: roster.organizer().clone(),
            title: details.title.clone(),
            location: details.location.clone(),
            starts_at: details.starts_at,
            comment: details.comment.clone(),
            status: roster.status(),
            capacity: roster.capacity(),
            occupancy: roster.occupancy_count(),
            slots: seating
                .seats()
                .iter()
                .map(|seat| SlotView {
                    name: seat.name.clone(),
                    auto_assigned: seat
                        .occupant
                        .as_ref()
                        .map_or(false, |p| seating.is_auto_assigned(p)),
                    occupant: seat.occupant.clone(),
                })
                .collect(),
            flexible: seating
                .pool()
                .iter()
                .map(|entry| FlexibleView {
                    participant: entry.participant.clone(),
                    open: open_roles(roster.template(), &entry.acceptable, &empty),
                    declared: entry.acceptable.clone(),
                })
                .collect(),
            created_at: *roster.created_at(),
            updated_at: *roster.updated_at(),
        }
    }

    /// Number of empty slots.
    pub fn vacancies(&self) -> usize {
        self.slots.iter().filter(|s| s.occupant.is_none()).count()
    }
}

fn open_roles(template: &RosterTemplate, declared: &Acceptable, empty: &[&str]) -> Acceptable {
    match declared {
        Acceptable::Any => Acceptable::Any,
        Acceptable::Roles(roles) => Acceptable::Roles(
            roles
                .iter()
                .filter(|role| {
                    template
                        .expand(&Acceptable::Roles(vec![(*role).clone()]))
                        .iter()
                        .any(|slot| empty.contains(slot))
                })
                .cloned()
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roster::{RosterDetails, SeatPolicy};

    fn pid(name: &str) -> ParticipantId {
        ParticipantId::new(name).unwrap()
    }

    fn light() -> Roster {
        Roster::new(
            RosterId::new(),
            pid("Organizer"),
            RosterTemplate::builtin(SessionType::Light).unwrap().clone(),
            SeatPolicy::Overwrite,
            RosterDetails::titled("Evening run"),
        )
        .unwrap()
    }

    #[test]
    fn snapshot_reports_capacity_and_occupancy() {
        let mut roster = light();
        roster.join_slot(pid("A"), "Tank").unwrap();
        roster.join_flexible(pid("B"), Acceptable::roles(["Healer", "DPS"])).unwrap();

        let snapshot = roster.snapshot();

        assert_eq!(snapshot.capacity, 4);
        assert_eq!(snapshot.occupancy, 2);
        assert_eq!(snapshot.vacancies(), 3);
        assert_eq!(snapshot.title, "Evening run");
    }

    #[test]
    fn snapshot_marks_auto_seated_occupants() {
        let mut roster = light();
        roster.join_slot(pid("A"), "Tank").unwrap();
        roster.join_flexible(pid("B"), Acceptable::roles(["Healer"])).unwrap();

        let snapshot = roster.snapshot();

        assert!(!snapshot.slots[0].auto_assigned);
        assert_eq!(snapshot.slots[1].occupant, Some(pid("B")));
        assert!(snapshot.slots[1].auto_assigned);
    }

    #[test]
    fn open_roles_drop_capabilities_with_no_empty_slot() {
        let mut roster = light();
        roster.join_slot(pid("T"), "Tank").unwrap();
        roster
            .join_flexible(pid("A"), Acceptable::roles(["Tank", "Healer", "DPS"]))
            .unwrap();

        let snapshot = roster.snapshot();

        assert_eq!(snapshot.flexible.len(), 1);
        assert_eq!(snapshot.flexible[0].open, Acceptable::roles(["Healer", "DPS"]));
        assert_eq!(
            snapshot.flexible[0].declared,
            Acceptable::roles(["Tank", "Healer", "DPS"])
        );
    }

    #[test]
    fn wildcard_stays_wildcard() {
        let mut roster = light();
        roster.join_flexible(pid("A"), Acceptable::Any).unwrap();
        assert_eq!(roster.snapshot().flexible[0].open, Acceptable::Any);
    }
}
