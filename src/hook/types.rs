use serde::Deserialize;

/// Webhook event posted by the platform when a room trigger fires
///
/// Only the nested room id is used; everything else the platform sends is
/// ignored.
#[derive(Debug, Deserialize)]
pub struct EventPayload {
    pub item: EventItem,
}

#[derive(Debug, Deserialize)]
pub struct EventItem {
    pub room: EventRoom,
}

#[derive(Debug, Deserialize)]
pub struct EventRoom {
    pub id: u64,
}
