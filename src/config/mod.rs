//! Configuration module for the warden service.
//!
//! Loads configuration from environment variables.

use std::env;

use url::Url;

use crate::error::ConfigError;

/// Default base URL of the external directory API.
const DEFAULT_DIRECTORY_API_BASE: &str = "https://discord.com/api";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    // MongoDB
    pub mongodb_uri: String,
    pub mongodb_database: String,

    /// Bot token used to authorize directory lookups.
    pub directory_token: String,

    /// Base URL of the directory API.
    pub directory_api_base: Url,

    /// Port the dashboard API listens on.
    pub api_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a required variable is missing or a value
    /// does not parse. The caller treats this as fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mongodb_uri =
            env::var("MONGODB_URI").map_err(|_| ConfigError::MissingVar("MONGODB_URI"))?;

        let mongodb_database =
            env::var("MONGODB_DATABASE").unwrap_or_else(|_| "warden".to_string());

        let directory_token =
            env::var("DIRECTORY_TOKEN").map_err(|_| ConfigError::MissingVar("DIRECTORY_TOKEN"))?;

        let directory_api_base = env::var("DIRECTORY_API_BASE")
            .unwrap_or_else(|_| DEFAULT_DIRECTORY_API_BASE.to_string());
        let directory_api_base =
            Url::parse(&directory_api_base).map_err(|e| ConfigError::InvalidVar {
                var: "DIRECTORY_API_BASE",
                reason: e.to_string(),
            })?;

        let api_port = match env::var("API_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidVar {
                var: "API_PORT",
                reason: e.to_string(),
            })?,
            Err(_) => 8080,
        };

        Ok(Self {
            mongodb_uri,
            mongodb_database,
            directory_token,
            directory_api_base,
            api_port,
        })
    }
}
