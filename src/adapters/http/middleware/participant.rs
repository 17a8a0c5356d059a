//! Participant identity extractor.
//!
//! The roster trusts the caller's stated identity: the `X-Participant`
//! header carries the participant's display name.
//!
//! # Example
//!
//! ```ignore
//! async fn my_handler(RequireParticipant(participant): RequireParticipant) -> String {
//!     format!("Hello, {}!", participant)
//! }
//! ```

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::ParticipantId;

/// Header naming the acting participant.
pub const PARTICIPANT_HEADER: &str = "x-participant";

/// Extractor that requires a valid `X-Participant` header.
#[derive(Debug, Clone)]
pub struct RequireParticipant(pub ParticipantId);

#[async_trait]
impl<S> FromRequestParts<S> for RequireParticipant
where
    S: Send + Sync,
{
    type Rejection = ParticipantRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(PARTICIPANT_HEADER)
            .ok_or(ParticipantRejection::Missing)?
            .to_str()
            .map_err(|_| ParticipantRejection::Invalid("header is not valid UTF-8".to_string()))?;

        ParticipantId::new(raw)
            .map(RequireParticipant)
            .map_err(|e| ParticipantRejection::Invalid(e.to_string()))
    }
}

/// Rejection type for identity failures.
#[derive(Debug, Clone)]
pub enum ParticipantRejection {
    /// No `X-Participant` header was sent.
    Missing,
    /// The header was present but not a usable name.
    Invalid(String),
}

impl IntoResponse for ParticipantRejection {
    fn into_response(self) -> Response {
        let message = match self {
            ParticipantRejection::Missing => "X-Participant header is required".to_string(),
            ParticipantRejection::Invalid(reason) => format!("Invalid X-Participant: {}", reason),
        };
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "code": "BAD_REQUEST",
                "message": message,
            })),
        )
            .into_response()
    }
}
