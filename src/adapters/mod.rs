//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `events` - In-memory event bus
//! - `storage` - Roster repositories (in-memory, YAML files)
//! - `http` - axum REST API

pub mod events;
pub mod http;
pub mod storage;

pub use events::{FullRosterLogger, InMemoryEventBus};
pub use storage::{FileRosterRepository, InMemoryRosterRepository};
