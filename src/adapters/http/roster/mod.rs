//! HTTP adapter for roster endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateRosterRequest, ErrorResponse, FlexibleResponse, JoinFlexibleRequest, JoinResponse,
    LeaveResponse, ListRostersQuery, RosterListResponse, RosterResponse, SlotResponse,
};
pub use handlers::RosterHandlers;
pub use routes::roster_routes;
