use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Json},
};
use tracing::{debug, instrument};

use crate::shared::{AppError, AppState};

/// Placeholder substituted with the configured base URL when the
/// descriptor is served
pub const BASE_URL_PLACEHOLDER: &str = "{{localBaseUrl}}";

/// HTTP handler for the liveness probe
///
/// GET /healthcheck
pub async fn healthcheck() -> Json<Vec<String>> {
    Json(vec!["OK".to_string()])
}

/// HTTP handler for the add-on descriptor
///
/// GET / and GET /atlassian-connect.json
/// Reads the descriptor template from the static directory and fills in
/// this deployment's base URL. A render failure is a 500 for the request,
/// never fatal for the process.
#[instrument(name = "descriptor", skip(state))]
pub async fn atlassian_connect(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let path = state.config.static_dir.join("atlassian-connect.json");
    debug!(path = %path.display(), "Rendering descriptor");

    let template = tokio::fs::read_to_string(&path).await.map_err(|e| {
        AppError::Descriptor(format!("failed to read {}: {}", path.display(), e))
    })?;

    let rendered = template.replace(BASE_URL_PLACEHOLDER, &state.config.base_url);

    Ok(([(header::CONTENT_TYPE, "application/json")], rendered))
}
