//! Client events - events emitted after a gateway payload is reconciled
//!
//! Each event is produced once the cache already reflects the change, so a
//! consumer observing an event can rely on the stores being up to date.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::{MessageReaction, PresenceStatus};
use crate::value_objects::Snowflake;

/// All events surfaced to consumers
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientEvent {
    GuildCreate(GuildCreateEvent),
    GuildUpdate(GuildUpdateEvent),
    GuildDelete(GuildDeleteEvent),
    GuildMemberAdd(GuildMemberAddEvent),
    GuildMemberRemove(GuildMemberRemoveEvent),
    GuildMembersChunk(GuildMembersChunkEvent),
    GuildEmojisUpdate(GuildEmojisUpdateEvent),
    ChannelPinsUpdate(ChannelPinsUpdateEvent),
    PresenceUpdate(PresenceUpdateEvent),
    MessageCreate(MessageCreateEvent),
    MessageReactionAdd(MessageReactionAddEvent),
    MessageReactionRemove(MessageReactionRemoveEvent),
}

impl ClientEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::GuildCreate(_) => "GUILD_CREATE",
            Self::GuildUpdate(_) => "GUILD_UPDATE",
            Self::GuildDelete(_) => "GUILD_DELETE",
            Self::GuildMemberAdd(_) => "GUILD_MEMBER_ADD",
            Self::GuildMemberRemove(_) => "GUILD_MEMBER_REMOVE",
            Self::GuildMembersChunk(_) => "GUILD_MEMBERS_CHUNK",
            Self::GuildEmojisUpdate(_) => "GUILD_EMOJIS_UPDATE",
            Self::ChannelPinsUpdate(_) => "CHANNEL_PINS_UPDATE",
            Self::PresenceUpdate(_) => "PRESENCE_UPDATE",
            Self::MessageCreate(_) => "MESSAGE_CREATE",
            Self::MessageReactionAdd(_) => "MESSAGE_REACTION_ADD",
            Self::MessageReactionRemove(_) => "MESSAGE_REACTION_REMOVE",
        }
    }
}

// ============================================================================
// Event Structs
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct GuildCreateEvent {
    pub guild_id: Snowflake,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuildUpdateEvent {
    pub guild_id: Snowflake,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuildDeleteEvent {
    pub guild_id: Snowflake,
    /// True when the guild went unavailable rather than being left
    pub unavailable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuildMemberAddEvent {
    pub guild_id: Snowflake,
    pub user_id: Snowflake,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuildMemberRemoveEvent {
    pub guild_id: Snowflake,
    pub user_id: Snowflake,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuildMembersChunkEvent {
    pub guild_id: Snowflake,
    /// Number of members carried by this chunk
    pub received: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuildEmojisUpdateEvent {
    pub guild_id: Snowflake,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChannelPinsUpdateEvent {
    pub guild_id: Option<Snowflake>,
    pub channel_id: Snowflake,
    /// Time of the most recent pin, if any remain
    pub last_pin_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PresenceUpdateEvent {
    pub guild_id: Snowflake,
    pub user_id: Snowflake,
    pub status: PresenceStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageCreateEvent {
    pub message_id: Snowflake,
    pub channel_id: Snowflake,
    pub guild_id: Option<Snowflake>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageReactionAddEvent {
    pub message_id: Snowflake,
    pub channel_id: Snowflake,
    pub user_id: Snowflake,
    /// Snapshot of the entry after the addition
    pub reaction: MessageReaction,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageReactionRemoveEvent {
    pub message_id: Snowflake,
    pub channel_id: Snowflake,
    pub user_id: Snowflake,
    /// Snapshot of the entry after the removal; count 0 means the entry was
    /// deleted
    pub reaction: MessageReaction,
}
