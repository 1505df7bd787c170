//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Preload the store with the demo content set. On by default so a
    /// fresh checkout serves something immediately.
    pub seed_demo_content: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            seed_demo_content: env::var("SEED_DEMO_CONTENT")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}
