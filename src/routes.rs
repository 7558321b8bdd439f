use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{descriptor, hook, install, shared::AppState};

/// Builds the full application router
///
/// Anything outside the known routes is served from the static asset
/// directory.
pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/healthcheck", get(descriptor::healthcheck))
        .route("/", get(descriptor::atlassian_connect))
        .route("/atlassian-connect.json", get(descriptor::atlassian_connect))
        .route("/installable", post(install::installable))
        .route("/hook", post(hook::hook))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
