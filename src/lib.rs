//! Party Roster - Recruitment rosters for multi-participant sessions
//!
//! This crate fills the named slots of a party from participants who either
//! pick an exact slot or declare a set of acceptable ones, auto-assigning
//! flexible participants only when a single seat is left for them.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
