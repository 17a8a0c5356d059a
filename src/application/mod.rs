//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, command handlers mutate rosters and query handlers only
//! read snapshots.

pub mod handlers;

pub use handlers::{
    CancelRosterCommand, CancelRosterHandler, CancelRosterResult, CreateRosterCommand,
    CreateRosterHandler, CreateRosterResult, GetRosterHandler, GetRosterQuery, JoinFlexibleCommand,
    JoinFlexibleHandler, JoinRosterResult, JoinSlotCommand, JoinSlotHandler, LeaveRosterCommand,
    LeaveRosterHandler, LeaveRosterResult, ListOpenRostersHandler, ListOpenRostersQuery,
    RosterLocks,
};
