//! Storage Adapters
//!
//! Implementations of the `RosterRepository` port.
//!
//! ## Available Adapters
//!
//! - **FileRosterRepository** - One YAML file per roster on disk
//! - **InMemoryRosterRepository** - Rosters kept in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileRosterRepository, InMemoryRosterRepository};
//!
//! let repo = FileRosterRepository::new("./data/rosters");
//! let repo = InMemoryRosterRepository::new();
//! ```

mod file_roster_repository;
mod in_memory_roster_repository;

pub use file_roster_repository::FileRosterRepository;
pub use in_memory_roster_repository::InMemoryRosterRepository;
