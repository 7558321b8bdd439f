use serde::{Deserialize, Serialize};

/// Default HipChat API host, overridable for tests and self-hosted servers
pub const DEFAULT_API_BASE: &str = "https://api.hipchat.com";

/// Body of a successful client_credentials grant against /v2/oauth/token
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// Room notification request body for /v2/room/{id}/notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub message_format: String,
    pub color: String,
}

impl Notification {
    /// The fixed notification posted whenever a webhook event fires
    pub fn hook_day() -> Self {
        Self {
            message: "nice <strong>Happy Hook Day!</strong>".to_string(),
            message_format: "html".to_string(),
            color: "red".to_string(),
        }
    }
}
