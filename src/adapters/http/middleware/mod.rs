//! HTTP middleware and extractors.

mod participant;

pub use participant::{ParticipantRejection, RequireParticipant, PARTICIPANT_HEADER};
