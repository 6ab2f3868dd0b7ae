// src/config.rs

use std::env;
use std::time::Duration;

/// Version reported by /version, /health and the home page.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_PORT: u16 = 8090;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Process-wide configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: port_from(env::var("PORT").ok()),
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

// Unset or unparsable PORT falls back to the default.
fn port_from(val: Option<String>) -> u16 {
    val.and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_PORT)
}
