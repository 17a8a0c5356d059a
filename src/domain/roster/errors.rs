//! Roster-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ParticipantId, RosterId, ValidationError};

/// Roster-specific errors.
///
/// Every variant is reported before any state change, so a failed
/// operation leaves the roster untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Roster was not found.
    NotFound(RosterId),
    /// Only the organizer may do this.
    Forbidden,
    /// Roster was cancelled and no longer accepts changes.
    Cancelled,
    /// A newcomer tried to join a full roster.
    CapacityExceeded { capacity: usize },
    /// Leave requested by someone who holds no seat and no pool entry.
    NotAMember(ParticipantId),
    /// Direct join on a taken seat under the `reject` seat policy.
    SlotOccupied { slot: String, occupant: ParticipantId },
    /// Malformed input such as an unknown slot or an empty declaration.
    InvalidRequest { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl RosterError {
    pub fn not_found(id: RosterId) -> Self {
        RosterError::NotFound(id)
    }
    pub fn forbidden() -> Self {
        RosterError::Forbidden
    }
    pub fn cancelled() -> Self {
        RosterError::Cancelled
    }
    pub fn capacity_exceeded(capacity: usize) -> Self {
        RosterError::CapacityExceeded { capacity }
    }
    pub fn not_a_member(participant: ParticipantId) -> Self {
        RosterError::NotAMember(participant)
    }
    pub fn slot_occupied(slot: impl Into<String>, occupant: ParticipantId) -> Self {
        RosterError::SlotOccupied {
            slot: slot.into(),
            occupant,
        }
    }
    pub fn invalid_request(field: impl Into<String>, message: impl Into<String>) -> Self {
        RosterError::InvalidRequest {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        RosterError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            RosterError::NotFound(_) => ErrorCode::RosterNotFound,
            RosterError::Forbidden => ErrorCode::Forbidden,
            RosterError::Cancelled => ErrorCode::RosterCancelled,
            RosterError::CapacityExceeded { .. } => ErrorCode::CapacityExceeded,
            RosterError::NotAMember(_) => ErrorCode::NotAMember,
            RosterError::SlotOccupied { .. } => ErrorCode::SlotOccupied,
            RosterError::InvalidRequest { .. } => ErrorCode::ValidationFailed,
            RosterError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            RosterError::NotFound(id) => format!("Roster not found: {}", id),
            RosterError::Forbidden => "Only the organizer can do this".to_string(),
            RosterError::Cancelled => "Roster has been cancelled".to_string(),
            RosterError::CapacityExceeded { capacity } => {
                format!("Roster is full ({} of {})", capacity, capacity)
            }
            RosterError::NotAMember(participant) => {
                format!("{} is not in this roster", participant)
            }
            RosterError::SlotOccupied { slot, occupant } => {
                format!("Slot '{}' is already taken by {}", slot, occupant)
            }
            RosterError::InvalidRequest { field, message } => {
                format!("Invalid request for '{}': {}", field, message)
            }
            RosterError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RosterError {}

impl From<ValidationError> for RosterError {
    fn from(err: ValidationError) -> Self {
        RosterError::invalid_request(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for RosterError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => RosterError::Forbidden,
            ErrorCode::RosterCancelled => RosterError::Cancelled,
            ErrorCode::ValidationFailed => RosterError::InvalidRequest {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => RosterError::Infrastructure(err.to_string()),
        }
    }
}
