//! Outbound gateway commands
//!
//! Reconciliation only consumes inbound events; the one place the cache
//! talks back is the member fetch, which requests chunks over whatever
//! connection the caller maintains. That seam is this trait.

use async_trait::async_trait;
use serde::Serialize;

use mirror_core::Snowflake;

use crate::error::BoxError;

/// Commands sent upstream over the gateway connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatewayCommand {
    /// Ask the server to stream a guild's member list in chunks
    RequestGuildMembers {
        guild_id: Snowflake,
        /// Username prefix filter; empty matches everyone
        query: String,
        /// Maximum members to return; 0 means no limit
        limit: u32,
    },
}

/// Connection half owned by the caller
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    /// Send a command upstream
    async fn send(&self, command: GatewayCommand) -> Result<(), BoxError>;
}
