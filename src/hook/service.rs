use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::hipchat::types::Notification;
use crate::registry::repository::RoomRegistry;
use crate::shared::AppError;

/// Result of attempting to dispatch a webhook event to its room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Notification delivered to the room's bound client
    Delivered,
    /// No credential registered for the room; nothing was sent
    RoomUnregistered,
    /// Room found but the outbound notification failed
    DeliveryFailed,
}

/// Service for dispatching webhook events to their originating room
///
/// Delivery is best-effort: an unregistered room or a failed send is an
/// outcome to log, never an error for the event source.
pub struct HookService {
    registry: Arc<dyn RoomRegistry + Send + Sync>,
}

impl HookService {
    pub fn new(registry: Arc<dyn RoomRegistry + Send + Sync>) -> Self {
        Self { registry }
    }

    #[instrument(skip(self))]
    pub async fn dispatch(&self, room_id: &str) -> Result<DispatchOutcome, AppError> {
        let Some(credential) = self.registry.get(room_id).await? else {
            // Expected when the event races an installation or the
            // process restarted and lost its in-memory registrations
            warn!(room_id = %room_id, "Room is not registered, dropping event");
            return Ok(DispatchOutcome::RoomUnregistered);
        };

        info!(room_id = %room_id, "Sending notification");

        match credential
            .client
            .send_notification(room_id, &Notification::hook_day())
            .await
        {
            Ok(()) => Ok(DispatchOutcome::Delivered),
            Err(e) => {
                warn!(room_id = %room_id, error = %e, "Failed to notify room");
                Ok(DispatchOutcome::DeliveryFailed)
            }
        }
    }
}
