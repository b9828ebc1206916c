// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

const DEFAULT_PLACES_URL: &str = "https://api.geoapify.com/v2/places";
const DEFAULT_REVERSE_URL: &str = "https://api.geoapify.com/v1/geocode/reverse";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup, read-only afterwards
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 5000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Geoapify API key, sent as `apiKey` on every provider call
    pub geoapify_api_key: String,

    /// Places search endpoint
    pub geoapify_places_url: String,

    /// Reverse geocoding endpoint
    pub geoapify_reverse_url: String,

    /// Browser origin allowed to call the API ("*" allows any)
    pub cors_allowed_origin: String,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            geoapify_api_key: env::var("GEOAPIFY_API_KEY").unwrap_or_default(),

            geoapify_places_url: env::var("GEOAPIFY_PLACES_URL")
                .unwrap_or_else(|_| DEFAULT_PLACES_URL.to_string()),

            geoapify_reverse_url: env::var("GEOAPIFY_REVERSE_URL")
                .unwrap_or_else(|_| DEFAULT_REVERSE_URL.to_string()),

            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.geoapify_places_url.is_empty() {
            return Err("GEOAPIFY_PLACES_URL must not be empty".to_string());
        }

        if self.geoapify_reverse_url.is_empty() {
            return Err("GEOAPIFY_REVERSE_URL must not be empty".to_string());
        }

        let origin = self.cors_allowed_origin.as_str();
        if origin != "*" && !origin.starts_with("http://") && !origin.starts_with("https://") {
            return Err(format!(
                "CORS_ALLOWED_ORIGIN must be \"*\" or an http(s) origin, got {:?}",
                origin
            ));
        }

        if self.geoapify_api_key.is_empty() {
            log::warn!("GEOAPIFY_API_KEY not configured - provider calls will be rejected");
        }

        Ok(())
    }
}

#[cfg(test)]
impl Config {
    /// Configuration pointing both endpoints at a local mock server
    pub fn for_tests(base_url: &str) -> Self {
        Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 0,
            environment: "test".to_string(),
            log_level: "debug".to_string(),
            geoapify_api_key: "test-key".to_string(),
            geoapify_places_url: format!("{}/v2/places", base_url),
            geoapify_reverse_url: format!("{}/v1/geocode/reverse", base_url),
            cors_allowed_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}
