use std::env;
use std::path::Path;
use std::time::Duration;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_BASE_URL: &str = "https://api.escuelajs.co/api/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const STORE_NAME: &str = "Escuela Marketplace";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        if let Err(e) = dotenvy::from_path(Path::new(path)) {
            tracing::warn!(%e, path, "Could not load env file");
        }
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("STOREFRONT_API_BASE_URL").unwrap_or_default())
}

/// Maximum wait for a single catalog request. Invalid or zero values fall back
/// to the default.
pub fn get_request_timeout() -> Duration {
    let secs = env::var("STOREFRONT_TIMEOUT_SECS")
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

pub fn get_host() -> String {
    env::var("STOREFRONT_HOST")
        .ok()
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| DEFAULT_HOST.to_string())
}

pub fn get_port() -> u16 {
    env::var("STOREFRONT_PORT")
        .ok()
        .and_then(|raw| raw.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
