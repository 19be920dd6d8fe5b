//! Client configuration structs
//!
//! Loads configuration from environment variables.

use serde::Deserialize;
use std::env;

/// Main client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub app: AppSettings,
    pub snowflake: SnowflakeConfig,
    pub gateway: GatewayClientConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Snowflake generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SnowflakeConfig {
    #[serde(default = "default_worker_id")]
    pub worker_id: u8,
    #[serde(default)]
    pub process_id: u8,
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
        Self {
            worker_id: default_worker_id(),
            process_id: 0,
        }
    }
}

/// Gateway client tuning
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayClientConfig {
    /// How long a member fetch waits for chunks before giving up
    #[serde(default = "default_member_fetch_timeout_secs")]
    pub member_fetch_timeout_secs: u64,
    /// Capacity of the broadcast channel carrying client events
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
}

impl Default for GatewayClientConfig {
    fn default() -> Self {
        Self {
            member_fetch_timeout_secs: default_member_fetch_timeout_secs(),
            event_buffer: default_event_buffer(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "mirror-client".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_worker_id() -> u8 {
    1
}

fn default_member_fetch_timeout_secs() -> u64 {
    120
}

fn default_event_buffer() -> usize {
    1024
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable carries an unparseable value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            snowflake: SnowflakeConfig {
                worker_id: parse_var("SNOWFLAKE_WORKER_ID")?.unwrap_or_else(default_worker_id),
                process_id: parse_var("SNOWFLAKE_PROCESS_ID")?.unwrap_or(0),
            },
            gateway: GatewayClientConfig {
                member_fetch_timeout_secs: parse_var("MEMBER_FETCH_TIMEOUT_SECS")?
                    .unwrap_or_else(default_member_fetch_timeout_secs),
                event_buffer: parse_var("EVENT_BUFFER")?.unwrap_or_else(default_event_buffer),
            },
        })
    }
}

/// Parse an optional environment variable, erroring on a present but
/// malformed value rather than silently falling back.
fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, value)),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
