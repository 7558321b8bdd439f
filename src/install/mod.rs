// Public API - what other modules can use
pub use handlers::installable;

// Internal modules
mod handlers;
pub mod service;
pub mod types;
