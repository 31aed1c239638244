use std::env;
use tracing::{info, warn};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:7783";
pub const DEFAULT_ADMIN_KEY_PATH: &str = "secret/admin_key.pub";

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub backend_url: Option<String>,
    pub bind_addr: String,
    pub admin_key_path: String,
    pub key_ttl_warning_days: u64,
    pub key_ttl_limit_days: u64,
}

impl Settings {
    pub fn from_env() -> Self {
        let backend_url = get_env_optional("BACKEND_URL");
        if backend_url.is_none() {
            warn!("BACKEND_URL is not set; every backend call will fail until it is configured");
        }

        Self {
            backend_url,
            bind_addr: get_env_string("BIND_ADDR", DEFAULT_BIND_ADDR),
            admin_key_path: get_env_string("ADMIN_KEY_PATH", DEFAULT_ADMIN_KEY_PATH),
            key_ttl_warning_days: get_env_u64("KEY_TTL_WARNING_DAYS", 90),
            key_ttl_limit_days: get_env_u64("KEY_TTL_LIMIT_DAYS", 365),
        }
    }
}

/// Get a variable, treating unset and blank values alike
pub fn get_env_optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Get a variable as String, returning the default if not found
pub fn get_env_string(key: &str, default: &str) -> String {
    get_env_optional(key).unwrap_or_else(|| {
        info!("{} not set, using default: {}", key, default);
        default.to_string()
    })
}

/// Get a variable as u64, returning the default if not found or invalid
pub fn get_env_u64(key: &str, default: u64) -> u64 {
    match get_env_optional(key) {
        Some(value) => value.parse().unwrap_or_else(|e| {
            warn!("Invalid {} value '{}': {}, using default: {}", key, value, e, default);
            default
        }),
        None => default,
    }
}
