use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL: &str = "https://emailschedule.me:8080";
const DEFAULT_DASHBOARD_REFRESH_MINUTES: u32 = 5;
const DEFAULT_ADMIN_SESSION_TIMEOUT_SECS: u32 = 30 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub enable_logging: bool,
    pub dashboard_refresh_minutes: u32,
    pub admin_session_timeout_secs: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            enable_logging: true,
            dashboard_refresh_minutes: DEFAULT_DASHBOARD_REFRESH_MINUTES,
            admin_session_timeout_secs: DEFAULT_ADMIN_SESSION_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Loads configuration from compile-time environment variables (see build.rs)
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("ENABLE_LOGGING"),
            option_env!("DASHBOARD_REFRESH_MINUTES"),
            option_env!("ADMIN_SESSION_TIMEOUT_SECS"),
        )
    }

    fn from_values(
        backend_url: Option<&str>,
        enable_logging: Option<&str>,
        refresh_minutes: Option<&str>,
        timeout_secs: Option<&str>,
    ) -> Self {
        Self {
            backend_url: backend_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            dashboard_refresh_minutes: refresh_minutes
                .and_then(|v| v.parse().ok())
                .filter(|m| *m > 0)
                .unwrap_or(DEFAULT_DASHBOARD_REFRESH_MINUTES),
            admin_session_timeout_secs: timeout_secs
                .and_then(|v| v.parse().ok())
                .filter(|s| *s > 0)
                .unwrap_or(DEFAULT_ADMIN_SESSION_TIMEOUT_SECS),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn log_level(&self) -> log::Level {
        if self.is_logging_enabled() {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }

    /// Dashboard background refresh period in milliseconds
    pub fn dashboard_refresh_ms(&self) -> u32 {
        self.dashboard_refresh_minutes.saturating_mul(60 * 1000)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.dashboard_refresh_ms(), 5 * 60 * 1000);
        assert_eq!(config.admin_session_timeout_secs, 1800);
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = AppConfig::from_values(
            Some("https://staging.example.com/"),
            Some("false"),
            Some("1"),
            Some("60"),
        );
        assert_eq!(config.backend_url(), "https://staging.example.com");
        assert!(!config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Info);
        assert_eq!(config.dashboard_refresh_ms(), 60_000);
        assert_eq!(config.admin_session_timeout_secs, 60);
    }

    #[test]
    fn test_garbage_values_fall_back() {
        let config = AppConfig::from_values(Some(""), Some("yes"), Some("0"), Some("soon"));
        assert_eq!(config.backend_url(), DEFAULT_BACKEND_URL);
        assert!(config.is_logging_enabled());
        assert_eq!(config.dashboard_refresh_minutes, 5);
        assert_eq!(config.admin_session_timeout_secs, 1800);
    }
}
