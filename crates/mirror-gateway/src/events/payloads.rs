//! Dispatch payload structs
//!
//! Wire shapes of the `d` field for each gateway event this crate handles.
//! Entity-shaped payloads (guilds, members, messages) are defined in
//! `mirror_core::payloads`; the structs here wrap them with routing fields.

use serde::Deserialize;

use mirror_core::payloads::{
    EmojiPayload, EmojiRefPayload, MemberPayload, PresencePayload, UserPayload,
};
use mirror_core::Snowflake;

/// GUILD_DELETE payload: a bare guild reference plus availability marker
#[derive(Debug, Clone, Deserialize)]
pub struct GuildDeletePayload {
    pub id: Snowflake,
    #[serde(default)]
    pub unavailable: bool,
}

/// GUILD_MEMBER_ADD payload: a member with its guild routing id
#[derive(Debug, Clone, Deserialize)]
pub struct GuildMemberAddPayload {
    pub guild_id: Snowflake,
    #[serde(flatten)]
    pub member: MemberPayload,
}

/// GUILD_MEMBER_REMOVE payload
#[derive(Debug, Clone, Deserialize)]
pub struct GuildMemberRemovePayload {
    pub guild_id: Snowflake,
    pub user: UserPayload,
}

/// GUILD_MEMBERS_CHUNK payload: one slice of a requested member list
#[derive(Debug, Clone, Deserialize)]
pub struct GuildMembersChunkPayload {
    pub guild_id: Snowflake,
    pub members: Vec<MemberPayload>,
}

/// GUILD_EMOJIS_UPDATE payload: the authoritative emoji set
#[derive(Debug, Clone, Deserialize)]
pub struct GuildEmojisUpdatePayload {
    pub guild_id: Snowflake,
    pub emojis: Vec<EmojiPayload>,
}

/// CHANNEL_PINS_UPDATE payload
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelPinsUpdatePayload {
    pub channel_id: Snowflake,
    /// Unix seconds of the most recent pin; absent when the last pin was
    /// removed
    #[serde(default)]
    pub last_pin_timestamp: Option<i64>,
}

/// PRESENCE_UPDATE payload: a presence with its guild routing id
#[derive(Debug, Clone, Deserialize)]
pub struct PresenceUpdatePayload {
    pub guild_id: Snowflake,
    #[serde(flatten)]
    pub presence: PresencePayload,
}

/// MESSAGE_REACTION_ADD / MESSAGE_REACTION_REMOVE payload
#[derive(Debug, Clone, Deserialize)]
pub struct ReactionActionPayload {
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
    pub user_id: Snowflake,
    pub emoji: EmojiRefPayload,
}
