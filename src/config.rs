use std::env;
use std::path::PathBuf;

use crate::shared::AppError;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STATIC_DIR: &str = "./static";

/// Process configuration, read once at startup and immutable afterwards
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Directory holding the descriptor template and other static assets
    pub static_dir: PathBuf,
    /// Public base URL this add-on advertises in its descriptor
    pub base_url: String,
}

impl Config {
    /// Reads configuration from the environment: `PORT`, `STATIC_DIR` and
    /// `BASE_URL`, with local-development defaults for anything unset.
    pub fn from_env() -> Result<Self, AppError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("invalid PORT {:?}: {}", raw, e)))?,
            Err(_) => DEFAULT_PORT,
        };

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR));

        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| format!("http://localhost:{}", port));

        Ok(Self {
            port,
            static_dir,
            base_url,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            base_url: format!("http://localhost:{}", DEFAULT_PORT),
        }
    }
}
