//! Typed gateway events
//!
//! A dispatch frame arrives as an event name plus a JSON `d` value; parsing
//! pairs the name with its payload struct so reducers work on typed data.

use serde::de::DeserializeOwned;

use mirror_core::payloads::{GuildPayload, MessagePayload};

use crate::error::GatewayError;
use crate::events::event_types::GatewayEventType;
use crate::events::payloads::{
    ChannelPinsUpdatePayload, GuildDeletePayload, GuildEmojisUpdatePayload, GuildMemberAddPayload,
    GuildMemberRemovePayload, GuildMembersChunkPayload, PresenceUpdatePayload,
    ReactionActionPayload,
};

/// A parsed gateway dispatch event
#[derive(Debug, Clone)]
pub enum GatewayEvent {
    GuildCreate(GuildPayload),
    GuildUpdate(GuildPayload),
    GuildDelete(GuildDeletePayload),
    GuildEmojisUpdate(GuildEmojisUpdatePayload),
    ChannelPinsUpdate(ChannelPinsUpdatePayload),
    GuildMemberAdd(GuildMemberAddPayload),
    GuildMemberRemove(GuildMemberRemovePayload),
    GuildMembersChunk(GuildMembersChunkPayload),
    PresenceUpdate(PresenceUpdatePayload),
    MessageCreate(MessagePayload),
    MessageReactionAdd(ReactionActionPayload),
    MessageReactionRemove(ReactionActionPayload),
}

impl GatewayEvent {
    /// Parse a dispatch frame's `d` value according to its event name
    ///
    /// # Errors
    /// Returns an error when the payload does not match the event's shape
    pub fn parse(kind: GatewayEventType, data: serde_json::Value) -> Result<Self, GatewayError> {
        fn from<T: DeserializeOwned>(data: serde_json::Value) -> Result<T, GatewayError> {
            serde_json::from_value(data).map_err(GatewayError::Payload)
        }

        Ok(match kind {
            GatewayEventType::GuildCreate => Self::GuildCreate(from(data)?),
            GatewayEventType::GuildUpdate => Self::GuildUpdate(from(data)?),
            GatewayEventType::GuildDelete => Self::GuildDelete(from(data)?),
            GatewayEventType::GuildEmojisUpdate => Self::GuildEmojisUpdate(from(data)?),
            GatewayEventType::ChannelPinsUpdate => Self::ChannelPinsUpdate(from(data)?),
            GatewayEventType::GuildMemberAdd => Self::GuildMemberAdd(from(data)?),
            GatewayEventType::GuildMemberRemove => Self::GuildMemberRemove(from(data)?),
            GatewayEventType::GuildMembersChunk => Self::GuildMembersChunk(from(data)?),
            GatewayEventType::PresenceUpdate => Self::PresenceUpdate(from(data)?),
            GatewayEventType::MessageCreate => Self::MessageCreate(from(data)?),
            GatewayEventType::MessageReactionAdd => Self::MessageReactionAdd(from(data)?),
            GatewayEventType::MessageReactionRemove => Self::MessageReactionRemove(from(data)?),
        })
    }

    /// The event type this payload belongs to
    #[must_use]
    pub const fn kind(&self) -> GatewayEventType {
        match self {
            Self::GuildCreate(_) => GatewayEventType::GuildCreate,
            Self::GuildUpdate(_) => GatewayEventType::GuildUpdate,
            Self::GuildDelete(_) => GatewayEventType::GuildDelete,
            Self::GuildEmojisUpdate(_) => GatewayEventType::GuildEmojisUpdate,
            Self::ChannelPinsUpdate(_) => GatewayEventType::ChannelPinsUpdate,
            Self::GuildMemberAdd(_) => GatewayEventType::GuildMemberAdd,
            Self::GuildMemberRemove(_) => GatewayEventType::GuildMemberRemove,
            Self::GuildMembersChunk(_) => GatewayEventType::GuildMembersChunk,
            Self::PresenceUpdate(_) => GatewayEventType::PresenceUpdate,
            Self::MessageCreate(_) => GatewayEventType::MessageCreate,
            Self::MessageReactionAdd(_) => GatewayEventType::MessageReactionAdd,
            Self::MessageReactionRemove(_) => GatewayEventType::MessageReactionRemove,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_pairs_name_with_payload() {
        let event = GatewayEvent::parse(
            GatewayEventType::GuildDelete,
            json!({ "id": "100", "unavailable": true }),
        )
        .unwrap();
        assert_eq!(event.kind(), GatewayEventType::GuildDelete);
        match event {
            GatewayEvent::GuildDelete(payload) => assert!(payload.unavailable),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_mismatched_payload() {
        let result = GatewayEvent::parse(
            GatewayEventType::GuildMembersChunk,
            json!({ "guild_id": "100" }),
        );
        assert!(result.is_err());
    }
}
