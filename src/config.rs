//! Configuration management for the bridal fulfillment service.
//!
//! This module handles loading and validating configuration from environment variables,
//! with an optional .env file for local development.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default Firestore REST endpoint.
pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Configuration for the bridal fulfillment service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Google Cloud project that owns the Firestore database
    pub firestore_project_id: String,

    /// Firestore API key for authentication
    pub firestore_api_key: String,

    /// Firestore REST base URL
    pub firestore_base_url: String,

    /// Collection holding the dress catalog (default: "dresses")
    pub dress_collection: String,

    /// Collection bookings are written to (default: "bookings")
    pub booking_collection: String,

    /// Port the webhook server listens on (default: 8080)
    pub port: u16,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `FIRESTORE_PROJECT_ID`: Google Cloud project id
    /// - `FIRESTORE_API_KEY`: API key for Firestore REST calls
    ///
    /// Optional environment variables:
    /// - `FIRESTORE_BASE_URL`: Firestore REST endpoint (default: production endpoint)
    /// - `DRESS_COLLECTION`: Catalog collection name (default: "dresses")
    /// - `BOOKING_COLLECTION`: Booking collection name (default: "bookings")
    /// - `PORT`: Listen port (default: 8080)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let firestore_project_id = env::var("FIRESTORE_PROJECT_ID")
            .map_err(|_| ConfigError::MissingVar("FIRESTORE_PROJECT_ID".to_string()))?;

        let firestore_api_key = env::var("FIRESTORE_API_KEY")
            .map_err(|_| ConfigError::MissingVar("FIRESTORE_API_KEY".to_string()))?;

        let firestore_base_url = env::var("FIRESTORE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_FIRESTORE_BASE_URL.to_string());

        // Validate base URL format
        if !firestore_base_url.starts_with("http://") && !firestore_base_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                var: "FIRESTORE_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        // Validate project id and API key are not empty
        if firestore_project_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "FIRESTORE_PROJECT_ID".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }
        if firestore_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "FIRESTORE_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let dress_collection =
            env::var("DRESS_COLLECTION").unwrap_or_else(|_| "dresses".to_string());
        let booking_collection =
            env::var("BOOKING_COLLECTION").unwrap_or_else(|_| "bookings".to_string());

        let port = Self::parse_env_u16("PORT", 8080)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            firestore_project_id,
            firestore_api_key,
            firestore_base_url,
            dress_collection,
            booking_collection,
            port,
            request_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            firestore_project_id: String::new(),
            firestore_api_key: String::new(),
            firestore_base_url: DEFAULT_FIRESTORE_BASE_URL.to_string(),
            dress_collection: "dresses".to_string(),
            booking_collection: "bookings".to_string(),
            port: 8080,
            request_timeout: 10,
            log_level: "info".to_string(),
        }
    }
}
