use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::types::InstallationPayload;
use crate::hipchat::token::{TokenExchanger, SCOPE_SEND_NOTIFICATION};
use crate::registry::models::RoomCredential;
use crate::registry::repository::RoomRegistry;
use crate::shared::AppError;

/// Service for handling installation business logic
pub struct InstallService {
    registry: Arc<dyn RoomRegistry + Send + Sync>,
    exchanger: Arc<dyn TokenExchanger + Send + Sync>,
}

impl InstallService {
    pub fn new(
        registry: Arc<dyn RoomRegistry + Send + Sync>,
        exchanger: Arc<dyn TokenExchanger + Send + Sync>,
    ) -> Self {
        Self {
            registry,
            exchanger,
        }
    }

    /// Exchanges the installation secrets for a room-scoped token and
    /// registers the resulting credential.
    ///
    /// Registry-idempotent: re-installation for the same room replaces
    /// the prior credential. Not network-idempotent: every call performs
    /// a fresh token exchange.
    #[instrument(skip(self, payload))]
    pub async fn install(&self, payload: InstallationPayload) -> Result<String, AppError> {
        if payload.oauth_id.trim().is_empty() || payload.oauth_secret.trim().is_empty() {
            return Err(AppError::InvalidPayload(
                "oauthId and oauthSecret must be non-empty".to_string(),
            ));
        }

        let room_id = payload.room_id.to_string();
        debug!(room_id = %room_id, "Exchanging installation credentials");

        let exchanged = self
            .exchanger
            .exchange(
                &payload.oauth_id,
                &payload.oauth_secret,
                &[SCOPE_SEND_NOTIFICATION],
            )
            .await?;

        self.registry
            .put(RoomCredential::new(
                room_id.clone(),
                exchanged.access_token,
                exchanged.client,
            ))
            .await?;

        info!(room_id = %room_id, "Room installed");
        Ok(room_id)
    }
}
