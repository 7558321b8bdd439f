use std::fmt;
use std::sync::Arc;

use crate::hipchat::client::RoomNotifier;

/// A live installation: the room's access token plus a client already
/// bound to it
#[derive(Clone)]
pub struct RoomCredential {
    /// Canonical registry key: the platform's numeric room id in decimal
    /// string form
    pub room_id: String,
    /// Bearer token scoped to sending notifications into this room
    pub access_token: String,
    /// Client that delivers notifications using `access_token`
    pub client: Arc<dyn RoomNotifier>,
}

impl RoomCredential {
    pub fn new(
        room_id: impl Into<String>,
        access_token: impl Into<String>,
        client: Arc<dyn RoomNotifier>,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            access_token: access_token.into(),
            client,
        }
    }
}

// Bearer tokens must not leak into logs
impl fmt::Debug for RoomCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoomCredential")
            .field("room_id", &self.room_id)
            .field("access_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}
