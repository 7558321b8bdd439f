use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use super::types::Notification;
use crate::shared::AppError;

/// Capability to deliver a notification into a specific room
#[async_trait]
pub trait RoomNotifier: Send + Sync {
    async fn send_notification(
        &self,
        room_id: &str,
        notification: &Notification,
    ) -> Result<(), AppError>;
}

/// HipChat API client bound to a single room-scoped access token
pub struct HipChatRoomClient {
    http: Client,
    api_base: String,
    access_token: String,
}

impl HipChatRoomClient {
    pub fn new(http: Client, api_base: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            http,
            api_base: api_base.into(),
            access_token: access_token.into(),
        }
    }

    /// Build the full API URL for a given v2 endpoint
    fn api_url(&self, endpoint: &str) -> String {
        let endpoint = endpoint.trim_start_matches('/');
        let base = self.api_base.trim_end_matches('/');
        format!("{}/v2/{}", base, endpoint)
    }
}

#[async_trait]
impl RoomNotifier for HipChatRoomClient {
    #[instrument(skip(self, notification))]
    async fn send_notification(
        &self,
        room_id: &str,
        notification: &Notification,
    ) -> Result<(), AppError> {
        let url = self.api_url(&format!("room/{}/notification", room_id));
        debug!(room_id = %room_id, "Posting room notification");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(notification)
            .send()
            .await
            .map_err(|e| AppError::Notification(format!("notification request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AppError::Notification(format!(
                "notification rejected with status {}: {}",
                status, body
            )));
        }

        debug!(room_id = %room_id, "Notification delivered");
        Ok(())
    }
}
