//! Seat table and flexible pool.
//!
//! `Seating` owns the three tables a solve pass reads and writes. It knows
//! nothing about capacity or lifecycle; the `Roster` aggregate enforces
//! those before calling in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::template::{Acceptable, RosterTemplate};
use crate::domain::foundation::ParticipantId;

/// One named position and its occupant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub name: String,
    pub occupant: Option<ParticipantId>,
}

/// A participant waiting for a seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlexibleEntry {
    pub participant: ParticipantId,
    pub acceptable: Acceptable,
    /// Join order; the pool is kept sorted on it.
    pub joined_seq: u64,
}

/// What an auto-seated participant originally declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoSeat {
    pub acceptable: Acceptable,
    pub joined_seq: u64,
}

/// A seat the solver filled on a participant's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoAssignment {
    pub participant: ParticipantId,
    pub slot: String,
}

impl fmt::Display for AutoAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.participant, self.slot)
    }
}

/// What a participant gave up when they were removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removed {
    Seat(String),
    Flexible(Acceptable),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seating {
    seats: Vec<Seat>,
    pool: Vec<FlexibleEntry>,
    auto_assigned: BTreeMap<ParticipantId, AutoSeat>,
    next_seq: u64,
}

impl Seating {
    /// Empty seating with one seat per template slot.
    pub fn new(template: &RosterTemplate) -> Self {
        Self {
            seats: template
                .slots()
                .iter()
                .map(|name| Seat {
                    name: name.clone(),
                    occupant: None,
                })
                .collect(),
            pool: Vec::new(),
            auto_assigned: BTreeMap::new(),
            next_seq: 0,
        }
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Flexible entries in join order.
    pub fn pool(&self) -> &[FlexibleEntry] {
        &self.pool
    }

    /// Seated participants in slot order, then the pool in join order.
    pub fn members(&self) -> Vec<ParticipantId> {
        self.seats
            .iter()
            .filter_map(|s| s.occupant.clone())
            .chain(self.pool.iter().map(|e| e.participant.clone()))
            .collect()
    }

    /// Returns true if the seated occupant got there through the solver.
    pub fn is_auto_assigned(&self, participant: &ParticipantId) -> bool {
        self.auto_assigned.contains_key(participant)
    }

    pub fn occupant(&self, slot: &str) -> Option<&ParticipantId> {
        self.seats
            .iter()
            .find(|s| s.name == slot)
            .and_then(|s| s.occupant.as_ref())
    }

    /// Slot currently held by `participant`, if any.
    pub fn seat_of(&self, participant: &ParticipantId) -> Option<&str> {
        self.seats
            .iter()
            .find(|s| s.occupant.as_ref() == Some(participant))
            .map(|s| s.name.as_str())
    }

    pub fn flexible_entry(&self, participant: &ParticipantId) -> Option<&FlexibleEntry> {
        self.pool.iter().find(|e| &e.participant == participant)
    }

    pub fn is_member(&self, participant: &ParticipantId) -> bool {
        self.seat_of(participant).is_some() || self.flexible_entry(participant).is_some()
    }

    pub fn seated_count(&self) -> usize {
        self.seats.iter().filter(|s| s.occupant.is_some()).count()
    }

    /// Seated plus flexible.
    pub fn occupancy(&self) -> usize {
        self.seated_count() + self.pool.len()
    }

    /// Empty slot names in template order.
    pub fn empty_slots(&self) -> Vec<&str> {
        self.seats
            .iter()
            .filter(|s| s.occupant.is_none())
            .map(|s| s.name.as_str())
            .collect()
    }

    /// Auto-seated pairs as they stand right now.
    pub(super) fn auto_seated(&self) -> Vec<AutoAssignment> {
        self.seats
            .iter()
            .filter_map(|seat| {
                let occupant = seat.occupant.as_ref()?;
                self.auto_assigned.contains_key(occupant).then(|| AutoAssignment {
                    participant: occupant.clone(),
                    slot: seat.name.clone(),
                })
            })
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Drops every trace of `participant`: seat, pool entry, auto record.
    ///
    /// Returns what they held, or `None` if they were neither seated nor
    /// flexible.
    pub(super) fn remove(&mut self, participant: &ParticipantId) -> Option<Removed> {
        self.auto_assigned.remove(participant);

        let mut removed = None;
        for seat in &mut self.seats {
            if seat.occupant.as_ref() == Some(participant) {
                seat.occupant = None;
                removed = Some(Removed::Seat(seat.name.clone()));
            }
        }
        if let Some(idx) = self.pool.iter().position(|e| &e.participant == participant) {
            let entry = self.pool.remove(idx);
            removed = Some(Removed::Flexible(entry.acceptable));
        }
        removed
    }

    /// Places `participant` in `slot` and returns whoever sat there.
    ///
    /// A displaced auto-seated occupant keeps their auto record so the next
    /// rebuild returns them to the pool.
    pub(super) fn seat(&mut self, slot: &str, participant: ParticipantId) -> Option<ParticipantId> {
        self.seats
            .iter_mut()
            .find(|s| s.name == slot)
            .and_then(|s| s.occupant.replace(participant))
    }

    /// Appends a flexible entry at the back of the pool.
    pub(super) fn add_flexible(&mut self, participant: ParticipantId, acceptable: Acceptable) {
        let joined_seq = self.next_seq;
        self.next_seq += 1;
        self.insert_flexible(FlexibleEntry {
            participant,
            acceptable,
            joined_seq,
        });
    }

    pub(super) fn insert_flexible(&mut self, entry: FlexibleEntry) {
        let idx = self.pool.partition_point(|e| e.joined_seq < entry.joined_seq);
        self.pool.insert(idx, entry);
    }

    pub(super) fn take_pool_entry(&mut self, idx: usize) -> FlexibleEntry {
        self.pool.remove(idx)
    }

    pub(super) fn take_auto_assigned(&mut self) -> BTreeMap<ParticipantId, AutoSeat> {
        std::mem::take(&mut self.auto_assigned)
    }

    pub(super) fn record_auto(&mut self, participant: ParticipantId, seat: AutoSeat) {
        self.auto_assigned.insert(participant, seat);
    }

    pub(super) fn vacate(&mut self, participant: &ParticipantId) {
        for seat in &mut self.seats {
            if seat.occupant.as_ref() == Some(participant) {
                seat.occupant = None;
            }
        }
    }
}
