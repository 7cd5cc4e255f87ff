//! Configuration for the feed client.
//!
//! For now this is intentionally simple: you can either use defaults
//! or override via an environment variable:
//!
//! - `FEED_URL` (default: "ws://127.0.0.1/ws")

use std::env;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Feed endpoint handed to the transport's `open`.
    pub url: String,
}

impl Config {
    /// Construct a `Config` from environment variables, falling back
    /// to reasonable defaults.
    pub fn from_env() -> Self {
        let url = env::var("FEED_URL").unwrap_or_else(|_| "ws://127.0.0.1/ws".to_string());
        Config { url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: "ws://127.0.0.1/ws".to_string(),
        }
    }
}
