//! Roster command and query handlers.
//!
//! Mutating handlers serialize on `RosterLocks` and run
//! load → mutate → save → publish while holding the roster's lock.

mod cancel_roster;
mod create_roster;
mod get_roster;
mod join;
mod join_flexible;
mod join_slot;
mod leave_roster;
mod list_open_rosters;
mod roster_events;
mod roster_locks;
#[cfg(test)]
mod test_support;

pub use cancel_roster::{CancelRosterCommand, CancelRosterHandler, CancelRosterResult};
pub use create_roster::{CreateRosterCommand, CreateRosterHandler, CreateRosterResult};
pub use get_roster::{GetRosterHandler, GetRosterQuery};
pub use join::JoinRosterResult;
pub use join_flexible::{JoinFlexibleCommand, JoinFlexibleHandler};
pub use join_slot::{JoinSlotCommand, JoinSlotHandler};
pub use leave_roster::{LeaveRosterCommand, LeaveRosterHandler, LeaveRosterResult};
pub use list_open_rosters::{ListOpenRostersHandler, ListOpenRostersQuery};
pub use roster_locks::{RosterGuard, RosterLocks};
