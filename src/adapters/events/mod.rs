//! Event bus adapters.
//!
//! - `InMemoryEventBus` - In-process bus that fans envelopes out to
//!   subscribed handlers and keeps a log of what was published
//! - `FullRosterLogger` - Subscriber that reports filled rosters

mod full_roster_logger;
mod in_memory;

pub use full_roster_logger::{FullRosterLogger, ROSTER_FILLED};
pub use in_memory::InMemoryEventBus;
