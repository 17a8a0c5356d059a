//! Roster domain module.
//!
//! Handles recruitment rosters: the slot table, the flexible pool, and the
//! fixed-point solver that seats flexible participants once their choice is
//! unambiguous.
//!
//! # Events
//!
//! - `RosterCreated` - Published when a roster is opened
//! - `ParticipantJoined` - Published when someone takes a slot or joins the pool
//! - `ParticipantLeft` - Published when someone leaves
//! - `ParticipantsAutoAssigned` - Published when a solve pass seats someone
//! - `RosterFilled` - Published once per fill when occupancy reaches capacity
//! - `RosterCancelled` - Published when the organizer cancels

mod aggregate;
mod errors;
mod events;
mod seating;
mod snapshot;
mod solver;
mod template;

pub use aggregate::{
    JoinOutcome, LeaveOutcome, Placement, Roster, RosterDetails, SeatPolicy, MAX_NOTE_LENGTH,
    MAX_TITLE_LENGTH,
};
pub use errors::RosterError;
pub use events::{
    ParticipantJoined, ParticipantLeft, ParticipantsAutoAssigned, RosterCancelled, RosterCreated,
    RosterFilled,
};
pub use seating::{AutoAssignment, AutoSeat, FlexibleEntry, Seat, Seating};
pub use snapshot::{FlexibleView, RosterSnapshot, SlotView};
pub use template::{Acceptable, Capability, RosterTemplate, SessionType, TemplateCatalog};
