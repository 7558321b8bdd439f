// Public API - what other modules can use
pub use handlers::hook;
pub use service::DispatchOutcome;

// Internal modules
mod handlers;
pub mod service;
pub mod types;
