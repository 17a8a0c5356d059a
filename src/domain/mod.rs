//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, events)
//! - `roster` - Roster aggregate, slot templates and the auto-assignment solver

pub mod foundation;
pub mod roster;
