//! # mirror-common
//!
//! Shared utilities including configuration and telemetry.

pub mod config;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppSettings, ClientConfig, ConfigError, Environment, GatewayClientConfig, SnowflakeConfig,
};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, TracingConfig, TracingError,
};
