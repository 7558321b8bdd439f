// Public API - what other modules can use
pub use client::{HipChatRoomClient, RoomNotifier};
pub use token::{ExchangedCredential, HipChatTokenExchanger, TokenExchanger, SCOPE_SEND_NOTIFICATION};
pub use types::Notification;

// Internal modules
pub mod client;
pub mod token;
pub mod types;
