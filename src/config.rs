use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub log_level: String,
    /// Largest file accepted by the upload forms, in bytes
    pub max_upload_bytes: u64,
    /// Used when a download response carries no usable filename
    pub report_fallback_name: String,
}

const DEFAULT_BACKEND_DEVELOPMENT: &str = "http://localhost:5000";
const DEFAULT_BACKEND_PRODUCTION: &str = "https://portal.example.edu";
const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;
const DEFAULT_REPORT_NAME: &str = "result-report.pdf";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: DEFAULT_BACKEND_DEVELOPMENT.to_string(),
            backend_url_production: DEFAULT_BACKEND_PRODUCTION.to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            report_fallback_name: DEFAULT_REPORT_NAME.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or(DEFAULT_BACKEND_DEVELOPMENT)
                .to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or(DEFAULT_BACKEND_PRODUCTION)
                .to_string(),
            environment: option_env!("ENVIRONMENT").unwrap_or("development").to_string(),
            log_level: option_env!("LOG_LEVEL").unwrap_or("info").to_string(),
            max_upload_bytes: option_env!("MAX_UPLOAD_BYTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            report_fallback_name: option_env!("REPORT_FALLBACK_NAME")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(DEFAULT_REPORT_NAME)
                .to_string(),
        }
    }

    /// Backend base URL for the current environment, without trailing slash
    pub fn backend_url(&self) -> &str {
        let url = match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        };
        url.trim_end_matches('/')
    }

    /// Log level for wasm-logger; unknown values fall back to Info
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig {
            backend_url_production: "https://prod.example.edu/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.backend_url(), DEFAULT_BACKEND_DEVELOPMENT);

        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://prod.example.edu");
    }

    #[test]
    fn unknown_log_level_defaults_to_info() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);

        let config = AppConfig {
            log_level: "debug".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
