use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{service::HookService, types::EventPayload};
use crate::shared::AppState;

/// HTTP handler for webhook events
///
/// POST /hook
/// Best-effort: always acknowledges with 200 `["OK"]` so the platform
/// never retries destructively. Malformed payloads, unregistered rooms
/// and failed deliveries are logged, not surfaced.
#[instrument(name = "hook", skip(state, body))]
pub async fn hook(State(state): State<AppState>, body: String) -> Json<Vec<String>> {
    let payload: EventPayload = match serde_json::from_str(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "Malformed hook payload, acknowledging without dispatch");
            return Json(vec!["OK".to_string()]);
        }
    };

    let room_id = payload.item.room.id.to_string();
    info!(room_id = %room_id, "Handling hook event");

    // Use injected registry from app state
    let service = HookService::new(Arc::clone(&state.registry));
    match service.dispatch(&room_id).await {
        Ok(outcome) => info!(room_id = %room_id, outcome = ?outcome, "Hook event handled"),
        Err(e) => warn!(room_id = %room_id, error = %e, "Hook dispatch failed"),
    }

    Json(vec!["OK".to_string()])
}
