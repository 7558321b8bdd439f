use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, info, instrument};

use super::models::RoomCredential;
use crate::shared::AppError;

/// Trait for room credential registry operations
///
/// Written by the installation path, read by the event dispatch path.
#[async_trait]
pub trait RoomRegistry {
    /// Unconditional upsert; a later installation for the same room
    /// replaces the prior credential
    async fn put(&self, credential: RoomCredential) -> Result<(), AppError>;

    /// Pure lookup; never mutates
    async fn get(&self, room_id: &str) -> Result<Option<RoomCredential>, AppError>;
}

/// In-memory implementation of RoomRegistry
///
/// A single lock guards the whole map. Installations and dispatches are
/// low-frequency, so per-room granularity buys nothing here. Credentials
/// live for the process lifetime only; a restart forgets every
/// installation.
pub struct InMemoryRoomRegistry {
    rooms: Mutex<HashMap<String, RoomCredential>>,
}

impl Default for InMemoryRoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRoomRegistry {
    /// Creates a new empty in-memory registry
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl RoomRegistry for InMemoryRoomRegistry {
    #[instrument(skip(self, credential))]
    async fn put(&self, credential: RoomCredential) -> Result<(), AppError> {
        let room_id = credential.room_id.clone();

        let mut rooms = self.rooms.lock().unwrap();
        let replaced = rooms.insert(room_id.clone(), credential).is_some();

        if replaced {
            info!(room_id = %room_id, "Room credential replaced");
        } else {
            info!(room_id = %room_id, "Room credential registered");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get(&self, room_id: &str) -> Result<Option<RoomCredential>, AppError> {
        let rooms = self.rooms.lock().unwrap();
        let credential = rooms.get(room_id).cloned();

        match &credential {
            Some(_) => debug!(room_id = %room_id, "Room credential found"),
            None => debug!(room_id = %room_id, "Room credential not found"),
        }

        Ok(credential)
    }
}
