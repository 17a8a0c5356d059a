//! HTTP adapters - REST API implementations.

pub mod middleware;
pub mod roster;

use std::time::Duration;

use axum::Router;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

pub use roster::{roster_routes, RosterHandlers};

/// Full application router: roster endpoints under `/api/rosters`, with
/// request tracing and a per-request timeout.
pub fn app_router(handlers: RosterHandlers, request_timeout: Duration) -> Router {
    Router::new()
        .nest("/api/rosters", roster_routes(handlers))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
