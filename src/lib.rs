// Library crate for the Happy Hook Day HipChat add-on
// This file exposes the public API for integration tests

pub mod config;
pub mod descriptor;
pub mod hipchat;
pub mod hook;
pub mod install;
pub mod registry;
pub mod routes;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use config::Config;
pub use hipchat::{
    ExchangedCredential, HipChatRoomClient, HipChatTokenExchanger, Notification, RoomNotifier,
    TokenExchanger, SCOPE_SEND_NOTIFICATION,
};
pub use hook::DispatchOutcome;
pub use registry::{InMemoryRoomRegistry, RoomCredential, RoomRegistry};
pub use routes::router;
pub use shared::{AppError, AppState};
