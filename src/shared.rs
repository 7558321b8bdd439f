use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::config::Config;
use crate::hipchat::token::TokenExchanger;
use crate::registry::repository::RoomRegistry;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn RoomRegistry + Send + Sync>,
    pub exchanger: Arc<dyn TokenExchanger + Send + Sync>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        registry: Arc<dyn RoomRegistry + Send + Sync>,
        exchanger: Arc<dyn TokenExchanger + Send + Sync>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            registry,
            exchanger,
            config,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Credential exchange failed: {0}")]
    CredentialExchange(String),

    #[error("Notification delivery failed: {0}")]
    Notification(String),

    #[error("Descriptor rendering failed: {0}")]
    Descriptor(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidPayload(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::CredentialExchange(msg) => (
                StatusCode::BAD_GATEWAY,
                format!("Credential exchange failed: {}", msg),
            ),
            AppError::Notification(msg) => (
                StatusCode::BAD_GATEWAY,
                format!("Notification delivery failed: {}", msg),
            ),
            AppError::Descriptor(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Descriptor rendering failed: {}", msg),
            ),
            AppError::Config(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Configuration error: {}", msg),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
