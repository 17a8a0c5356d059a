//! HTTP routes for roster endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    cancel_roster, create_roster, get_roster, join_flexible, join_slot, leave_roster,
    list_rosters, RosterHandlers,
};

/// Creates the roster router with all endpoints.
pub fn roster_routes(handlers: RosterHandlers) -> Router {
    Router::new()
        .route("/", post(create_roster).get(list_rosters))
        .route("/:id", get(get_roster))
        .route("/:id/slots/:slot", post(join_slot))
        .route("/:id/flexible", post(join_flexible))
        .route("/:id/leave", post(leave_roster))
        .route("/:id/cancel", post(cancel_roster))
        .with_state(handlers)
}
