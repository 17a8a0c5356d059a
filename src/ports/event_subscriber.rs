//! EventSubscriber port - registering interest in roster events.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Handler for processing domain events.
///
/// A failing handler is logged by the bus and does not stop the others.
///
/// # Example
///
/// ```ignore
/// struct FullRosterNotifier;
///
/// #[async_trait]
/// impl EventHandler for FullRosterNotifier {
///     async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
///         let filled: RosterFilled = event.payload_as()?;
///         // tell filled.organizer
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "FullRosterNotifier"
///     }
/// }
/// ```
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Handler name for logging.
    fn name(&self) -> &'static str;
}

/// Port for subscribing to domain events by event type.
pub trait EventSubscriber: Send + Sync {
    /// Subscribe handler to a specific event type (e.g. `roster.filled.v1`).
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    /// Subscribe the same handler to several event types.
    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>);
}

/// Publisher and subscriber in one.
pub trait EventBus: super::EventPublisher + EventSubscriber {}

impl<T: super::EventPublisher + EventSubscriber> EventBus for T {}
