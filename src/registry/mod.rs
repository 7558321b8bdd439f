// Public API - what other modules can use
pub use models::RoomCredential;
pub use repository::{InMemoryRoomRegistry, RoomRegistry};

// Internal modules
pub mod models;
pub mod repository;
