//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the roster domain and the outside world. Adapters implement these ports.
//!
//! - `RosterRepository` - Persistence of roster aggregates
//! - `EventPublisher` - Publishing domain events
//! - `EventSubscriber` / `EventHandler` - Reacting to domain events

mod event_publisher;
mod event_subscriber;
mod roster_repository;

pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
pub use roster_repository::RosterRepository;
