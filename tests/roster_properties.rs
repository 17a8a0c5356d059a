//! Property-based tests for roster invariants.
//!
//! Random sequences of joins and leaves on the light template must keep:
//! - occupancy within capacity
//! - every participant in at most one place
//! - the pool at a fixed point (no entry with exactly one empty candidate)
//! - rejected operations free of side effects

use std::collections::HashSet;

use proptest::prelude::*;

use party_roster::domain::foundation::{ParticipantId, RosterId};
use party_roster::domain::roster::{
    Acceptable, Roster, RosterDetails, RosterTemplate, SeatPolicy, SessionType,
};

const PARTICIPANTS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];
const SLOTS: [&str; 4] = ["Tank", "Healer", "DPS1", "DPS2"];
const ROLES: [&str; 4] = ["Tank", "Healer", "DPS", "DPS2"];

#[derive(Debug, Clone)]
enum Op {
    Slot(usize, usize),
    Flexible(usize, Vec<usize>),
    Leave(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..PARTICIPANTS.len(), 0..SLOTS.len()).prop_map(|(p, s)| Op::Slot(p, s)),
        (
            0..PARTICIPANTS.len(),
            proptest::collection::vec(0..ROLES.len(), 0..3)
        )
            .prop_map(|(p, r)| Op::Flexible(p, r)),
        (0..PARTICIPANTS.len()).prop_map(Op::Leave),
    ]
}

fn policy() -> impl Strategy<Value = SeatPolicy> {
    prop_oneof![Just(SeatPolicy::Overwrite), Just(SeatPolicy::Reject)]
}

fn pid(idx: usize) -> ParticipantId {
    ParticipantId::new(PARTICIPANTS[idx]).unwrap()
}

fn roster(policy: SeatPolicy) -> Roster {
    Roster::new(
        RosterId::new(),
        ParticipantId::new("Organizer").unwrap(),
        RosterTemplate::builtin(SessionType::Light).unwrap().clone(),
        policy,
        RosterDetails::titled("Weekly raid"),
    )
    .unwrap()
}

fn apply(roster: &mut Roster, op: &Op) -> bool {
    match op {
        Op::Slot(p, s) => roster.join_slot(pid(*p), SLOTS[*s]).is_ok(),
        Op::Flexible(p, roles) => {
            let acceptable = if roles.is_empty() {
                Acceptable::Any
            } else {
                Acceptable::roles(roles.iter().map(|r| ROLES[*r]))
            };
            roster.join_flexible(pid(*p), acceptable).is_ok()
        }
        Op::Leave(p) => roster.leave(&pid(*p)).is_ok(),
    }
}

fn assert_invariants(roster: &Roster) {
    let seating = roster.seating();

    assert!(roster.occupancy_count() <= roster.capacity());

    let members = seating.members();
    let unique: HashSet<_> = members.iter().collect();
    assert_eq!(unique.len(), members.len(), "participant held twice: {:?}", members);

    let empty: HashSet<&str> = seating.empty_slots().into_iter().collect();
    for entry in seating.pool() {
        let candidates = roster
            .template()
            .expand(&entry.acceptable)
            .into_iter()
            .filter(|slot| empty.contains(slot))
            .count();
        assert_ne!(
            candidates, 1,
            "{} was left in the pool with a single open seat",
            entry.participant
        );
    }

    let sequences: Vec<u64> = seating.pool().iter().map(|e| e.joined_seq).collect();
    assert!(sequences.windows(2).all(|w| w[0] < w[1]));

    assert_eq!(roster.is_full(), roster.occupancy_count() == roster.capacity());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn invariants_hold_after_every_operation(
        policy in policy(),
        ops in proptest::collection::vec(op(), 1..40),
    ) {
        let mut roster = roster(policy);
        for op in &ops {
            apply(&mut roster, op);
            assert_invariants(&roster);
        }
    }

    #[test]
    fn rejected_operation_leaves_roster_untouched(
        policy in policy(),
        ops in proptest::collection::vec(op(), 1..40),
    ) {
        let mut roster = roster(policy);
        for op in &ops {
            let before = roster.clone();
            if !apply(&mut roster, op) {
                prop_assert_eq!(&roster, &before);
            }
        }
    }

    #[test]
    fn leaving_everyone_empties_the_roster(
        ops in proptest::collection::vec(op(), 1..30),
    ) {
        let mut roster = roster(SeatPolicy::Overwrite);
        for op in &ops {
            apply(&mut roster, op);
        }
        for member in roster.seating().members() {
            roster.leave(&member).unwrap();
        }
        prop_assert_eq!(roster.occupancy_count(), 0);
        prop_assert!(roster.seating().pool().is_empty());
        prop_assert!(!roster.full_notified());
    }
}
