//! Gateway error types

use mirror_core::Snowflake;

/// Boxed transport error
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by gateway reconciliation and member fetch
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Unknown guild: {0}")]
    UnknownGuild(Snowflake),

    #[error("Members didn't arrive in time")]
    MembersTimeout,

    #[error("Event stream closed")]
    StreamClosed,

    #[error("Malformed event payload: {0}")]
    Payload(#[source] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] BoxError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GatewayError::UnknownGuild(Snowflake::new(7));
        assert_eq!(err.to_string(), "Unknown guild: 7");
        assert_eq!(
            GatewayError::MembersTimeout.to_string(),
            "Members didn't arrive in time"
        );
    }
}
