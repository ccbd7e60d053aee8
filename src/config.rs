use std::env;

use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the HRMS REST API.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub log_dir: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            api_base_url: env::var("HRMS_API_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
            request_timeout_secs: env::var("HRMS_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("HRMS_REQUEST_TIMEOUT_SECS must be a number"),
            log_dir: env::var("HRMS_LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            log_level: env::var("HRMS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
