use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hookday::config::Config;
use hookday::hipchat::HipChatTokenExchanger;
use hookday::registry::InMemoryRoomRegistry;
use hookday::routes::router;
use hookday::shared::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hookday=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Happy Hook Day add-on");

    let config = Arc::new(Config::from_env()?);

    // Create shared application state with dependency injection; the
    // registry is in-memory only, so installations do not survive a
    // restart
    let registry = Arc::new(InMemoryRoomRegistry::new());
    let exchanger = Arc::new(HipChatTokenExchanger::new()?);

    let app_state = AppState::new(registry, exchanger, Arc::clone(&config));
    let app = router(app_state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(port = config.port, base_url = %config.base_url, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
