use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{service::InstallService, types::InstallationPayload};
use crate::shared::{AppError, AppState};

/// HTTP handler for add-on installation
///
/// POST /installable
/// Exchanges the posted secrets for a room-scoped token and registers the
/// room; responds with the platform's expected `["OK"]` acknowledgement.
#[instrument(name = "installable", skip(state, payload))]
pub async fn installable(
    State(state): State<AppState>,
    Json(payload): Json<InstallationPayload>,
) -> Result<Json<Vec<String>>, AppError> {
    info!(room_id = payload.room_id, "Handling installation request");

    // Use injected dependencies from app state
    let service = InstallService::new(Arc::clone(&state.registry), Arc::clone(&state.exchanger));
    let room_id = service.install(payload).await?;

    info!(room_id = %room_id, "Installation completed");

    Ok(Json(vec!["OK".to_string()]))
}
