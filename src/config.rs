//! Process configuration read from the environment.

use std::env;

pub const DEFAULT_PORT: u16 = 5800;
pub const DEFAULT_STORE_URL: &str = "redis://127.0.0.1:6379";

/// Listening port and store address, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store_url: String,
}

impl Config {
    /// Reads `PORT` and `REDIS_URL`, falling back to the defaults when a
    /// variable is unset or unparsable.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let store_url = env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_STORE_URL.to_string());

        Self { port, store_url }
    }
}
