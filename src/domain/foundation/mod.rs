//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the roster domain.

mod command;
mod errors;
mod events;
mod ids;
mod roster_status;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{ParticipantId, RosterId};
pub use roster_status::RosterStatus;
pub use timestamp::Timestamp;
