//! Fire-and-forget event emission.

use tracing::{debug, warn};

use reliefhub_core::events::{DomainEvent, EventPayload};
use reliefhub_core::traits::EventPublisher;
use reliefhub_core::types::UserId;

/// Publishes an event after a committed write. Failures are logged only.
pub(crate) async fn emit(
    publisher: &dyn EventPublisher,
    actor_id: Option<UserId>,
    payload: EventPayload,
) {
    let event = DomainEvent::new(actor_id, payload);
    let name = event.name();
    match publisher.publish(event).await {
        Ok(receivers) => debug!(event = name, receivers, "Event published"),
        Err(e) => warn!(event = name, error = %e, "Event delivery failed"),
    }
}
