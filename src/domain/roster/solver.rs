//! Fixed-point auto-assignment.
//!
//! A solve pass runs after every mutation and has two phases:
//!
//! 1. **Rebuild.** Every auto-seated participant is pulled back into the
//!    pool at their original join position with their original
//!    declaration, and their seat is cleared. Participants whose seat was
//!    taken by a direct join come back the same way.
//! 2. **Promote.** Scan the pool in join order. The first entry whose
//!    expanded declaration meets exactly one empty slot is seated there and
//!    the scan restarts. The pass ends when a full scan commits nothing.
//!
//! Each commit fills one empty slot, so promotion ends after at most
//! `capacity` commits. Because rebuild always starts from the same pool
//! order, re-solving an unchanged roster reproduces the same seats.

use tracing::debug;

use super::seating::{AutoAssignment, AutoSeat, FlexibleEntry, Seating};
use super::template::RosterTemplate;

impl Seating {
    /// Runs one solve pass and returns the seats that are new compared to
    /// the auto-seating held before the pass, in commit order.
    pub(super) fn solve(&mut self, template: &RosterTemplate) -> Vec<AutoAssignment> {
        let before = self.auto_seated();
        self.rebuild();
        let committed = self.promote(template);

        let notes: Vec<AutoAssignment> = committed
            .into_iter()
            .filter(|assignment| !before.contains(assignment))
            .collect();
        debug!(
            notes = notes.len(),
            pool = self.pool().len(),
            "solve pass finished"
        );
        notes
    }

    fn rebuild(&mut self) {
        for (participant, record) in self.take_auto_assigned() {
            self.vacate(&participant);
            if self.flexible_entry(&participant).is_none() {
                self.insert_flexible(FlexibleEntry {
                    participant,
                    acceptable: record.acceptable,
                    joined_seq: record.joined_seq,
                });
            }
        }
    }

    fn promote(&mut self, template: &RosterTemplate) -> Vec<AutoAssignment> {
        let mut committed = Vec::new();
        while let Some((idx, slot)) = self.next_unique_candidate(template) {
            let entry = self.take_pool_entry(idx);
            self.seat(&slot, entry.participant.clone());
            self.record_auto(
                entry.participant.clone(),
                AutoSeat {
                    acceptable: entry.acceptable,
                    joined_seq: entry.joined_seq,
                },
            );
            committed.push(AutoAssignment {
                participant: entry.participant,
                slot,
            });
        }
        committed
    }

    /// First pool entry, in join order, with exactly one open candidate.
    fn next_unique_candidate(&self, template: &RosterTemplate) -> Option<(usize, String)> {
        let empty = self.empty_slots();
        if empty.is_empty() {
            return None;
        }
        self.pool().iter().enumerate().find_map(|(idx, entry)| {
            let mut candidates = template
                .expand(&entry.acceptable)
                .into_iter()
                .filter(|slot| empty.contains(slot));
            match (candidates.next(), candidates.next()) {
                (Some(only), None) => Some((idx, only.to_string())),
                _ => None,
            }
        })
    }
}
