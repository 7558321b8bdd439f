//! Mock collaborators for integration tests
#![allow(dead_code)] // Test utilities may not all be used in every test

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use hookday::{AppError, ExchangedCredential, Notification, RoomNotifier, TokenExchanger};

/// Notifier that records every delivery attempt, optionally failing
/// each one
pub struct RecordingNotifier {
    calls: Mutex<Vec<(String, Notification)>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<(String, Notification)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RoomNotifier for RecordingNotifier {
    async fn send_notification(
        &self,
        room_id: &str,
        notification: &Notification,
    ) -> Result<(), AppError> {
        self.calls
            .lock()
            .unwrap()
            .push((room_id.to_string(), notification.clone()));
        if self.fail {
            return Err(AppError::Notification("simulated failure".to_string()));
        }
        Ok(())
    }
}

/// Exchange request as seen by the mock exchanger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeCall {
    pub client_id: String,
    pub client_secret: String,
    pub scopes: Vec<String>,
}

/// Exchanger that issues tokens from a fixed sequence, binding every
/// credential to a shared recording notifier
pub struct SequencedTokenExchanger {
    tokens: Mutex<VecDeque<String>>,
    notifier: Arc<RecordingNotifier>,
    calls: Mutex<Vec<ExchangeCall>>,
}

impl SequencedTokenExchanger {
    pub fn new(tokens: &[&str], notifier: Arc<RecordingNotifier>) -> Self {
        Self {
            tokens: Mutex::new(tokens.iter().map(|t| t.to_string()).collect()),
            notifier,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ExchangeCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenExchanger for SequencedTokenExchanger {
    async fn exchange(
        &self,
        client_id: &str,
        client_secret: &str,
        scopes: &[&str],
    ) -> Result<ExchangedCredential, AppError> {
        self.calls.lock().unwrap().push(ExchangeCall {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            scopes: scopes.iter().map(|s| s.to_string()).collect(),
        });

        let access_token = self
            .tokens
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| "token-exhausted".to_string());

        Ok(ExchangedCredential {
            access_token,
            client: Arc::clone(&self.notifier) as Arc<dyn RoomNotifier>,
        })
    }
}
