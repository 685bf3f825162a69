use std::env;
use std::path::Path;
use std::time::Duration;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5050;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_THEME_FILE: &str = "preferences.json";
pub const DEFAULT_FORBIDDEN_REDIRECT_PATH: &str = "/dashboard";
pub const DEFAULT_FORBIDDEN_REDIRECT_DELAY_MS: u64 = 2000;
pub const LOGIN_REDIRECT_PATH: &str = "/login?from=admin";
pub const AUTH_COOKIE_NAME: &str = "auth_token";
pub const ALERT_TTL_SECS: i64 = 5;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("ADMIN_API_BASE_URL").unwrap_or_default())
}

/// Session token sent to the admin API as the `auth_token` cookie.
pub fn get_auth_token() -> Option<String> {
    env::var("ADMIN_AUTH_TOKEN")
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

pub fn get_theme_file() -> String {
    env::var("THEME_FILE")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_THEME_FILE.to_string())
}

pub fn get_forbidden_redirect_path() -> String {
    env::var("FORBIDDEN_REDIRECT_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FORBIDDEN_REDIRECT_PATH.to_string())
}

pub fn get_forbidden_redirect_delay() -> Duration {
    let ms = env::var("FORBIDDEN_REDIRECT_DELAY_MS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_FORBIDDEN_REDIRECT_DELAY_MS);
    Duration::from_millis(ms)
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Where the console sends the operator when the API refuses or loses the session.
#[derive(Debug, Clone)]
pub struct RedirectSettings {
    pub api_base_url: String,
    pub forbidden_path: String,
    pub forbidden_delay: Duration,
}

impl RedirectSettings {
    pub fn from_env() -> Self {
        Self {
            api_base_url: get_api_base_url(),
            forbidden_path: get_forbidden_redirect_path(),
            forbidden_delay: get_forbidden_redirect_delay(),
        }
    }

    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: sanitize_base_url(api_base_url),
            forbidden_path: DEFAULT_FORBIDDEN_REDIRECT_PATH.to_string(),
            forbidden_delay: Duration::from_millis(DEFAULT_FORBIDDEN_REDIRECT_DELAY_MS),
        }
    }
}
