use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

use super::client::{HipChatRoomClient, RoomNotifier};
use super::types::{TokenResponse, DEFAULT_API_BASE};
use crate::shared::AppError;

/// The only scope this integration ever requests
pub const SCOPE_SEND_NOTIFICATION: &str = "send_notification";

/// Result of a successful token exchange: the raw token plus a client
/// already bound to it
#[derive(Clone)]
pub struct ExchangedCredential {
    pub access_token: String,
    pub client: Arc<dyn RoomNotifier>,
}

// Bearer tokens must not leak into logs
impl std::fmt::Debug for ExchangedCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangedCredential")
            .field("access_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Trait for exchanging installation secrets for a scoped access token
#[async_trait]
pub trait TokenExchanger {
    async fn exchange(
        &self,
        client_id: &str,
        client_secret: &str,
        scopes: &[&str],
    ) -> Result<ExchangedCredential, AppError>;
}

/// Exchanger backed by the HipChat /v2/oauth/token endpoint
pub struct HipChatTokenExchanger {
    http: Client,
    api_base: String,
}

impl HipChatTokenExchanger {
    pub fn new() -> Result<Self, AppError> {
        Self::with_api_base(DEFAULT_API_BASE)
    }

    pub fn with_api_base(api_base: impl Into<String>) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_base: api_base.into(),
        })
    }
}

#[async_trait]
impl TokenExchanger for HipChatTokenExchanger {
    #[instrument(skip(self, client_secret))]
    async fn exchange(
        &self,
        client_id: &str,
        client_secret: &str,
        scopes: &[&str],
    ) -> Result<ExchangedCredential, AppError> {
        if client_id.is_empty() || client_secret.is_empty() {
            return Err(AppError::InvalidPayload(
                "oauth client id and secret must be non-empty".to_string(),
            ));
        }

        let url = format!("{}/v2/oauth/token", self.api_base.trim_end_matches('/'));
        let scope = scopes.join(" ");
        let params = [
            ("grant_type", "client_credentials"),
            ("scope", scope.as_str()),
        ];

        debug!(client_id = %client_id, scope = %scope, "Requesting access token");

        // Single attempt; a failed installation is reported back to the
        // platform rather than retried here
        let response = self
            .http
            .post(&url)
            .basic_auth(client_id, Some(client_secret))
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::CredentialExchange(format!("token request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AppError::CredentialExchange(format!(
                "token endpoint returned {}: {}",
                status, body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::CredentialExchange(format!("malformed token response: {}", e)))?;

        info!(client_id = %client_id, "Access token issued");

        let client = HipChatRoomClient::new(
            self.http.clone(),
            self.api_base.clone(),
            token.access_token.clone(),
        );

        Ok(ExchangedCredential {
            access_token: token.access_token,
            client: Arc::new(client),
        })
    }
}
