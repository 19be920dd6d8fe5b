//! Wire payload structs consumed by reconciliation
//!
//! Every field the server may omit is an `Option`; absence means "retain
//! the cached value", which lets partial update payloads reuse the same
//! absorption path as full create payloads. Fields that are both optional
//! and nullable on the wire use `Option<Option<T>>`: missing deserializes
//! to `None`, an explicit `null` to `Some(None)`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::value_objects::{Permissions, Snowflake};

/// Distinguish an explicit `null` from a missing field.
///
/// Used with `#[serde(default, deserialize_with = "double_option")]`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Full or partial guild state payload (guild create / guild update)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuildPayload {
    pub id: Snowflake,
    #[serde(default)]
    pub unavailable: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub icon: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub splash: Option<Option<String>>,
    #[serde(default)]
    pub owner_id: Option<Snowflake>,
    #[serde(default)]
    pub large: Option<bool>,
    #[serde(default)]
    pub member_count: Option<u64>,
    #[serde(default)]
    pub default_message_notifications: Option<u8>,
    #[serde(default)]
    pub explicit_content_filter: Option<u8>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub verification_level: Option<u8>,
    #[serde(default)]
    pub mfa_level: Option<u8>,
    #[serde(default, deserialize_with = "double_option")]
    pub system_channel_id: Option<Option<Snowflake>>,
    #[serde(default, deserialize_with = "double_option")]
    pub afk_channel_id: Option<Option<Snowflake>>,
    #[serde(default)]
    pub afk_timeout: Option<u32>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub application_id: Option<Option<Snowflake>>,
    #[serde(default)]
    pub embed_enabled: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub embed_channel_id: Option<Option<Snowflake>>,
    #[serde(default)]
    pub widget_enabled: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub widget_channel_id: Option<Option<Snowflake>>,
    #[serde(default)]
    pub roles: Option<Vec<RolePayload>>,
    #[serde(default)]
    pub emojis: Option<Vec<EmojiPayload>>,
    #[serde(default)]
    pub channels: Option<Vec<ChannelPayload>>,
    #[serde(default)]
    pub members: Option<Vec<MemberPayload>>,
    #[serde(default)]
    pub presences: Option<Vec<PresencePayload>>,
    #[serde(default)]
    pub voice_states: Option<Vec<VoiceStatePayload>>,
}

/// Guild channel payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelPayload {
    pub id: Snowflake,
    #[serde(default, rename = "type")]
    pub kind: Option<u8>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub topic: Option<Option<String>>,
    #[serde(default)]
    pub position: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub parent_id: Option<Option<Snowflake>>,
    #[serde(default)]
    pub nsfw: Option<bool>,
}

/// Custom guild emoji payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmojiPayload {
    pub id: Snowflake,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub roles: Option<Vec<Snowflake>>,
    #[serde(default)]
    pub require_colons: Option<bool>,
    #[serde(default)]
    pub managed: Option<bool>,
    #[serde(default)]
    pub animated: Option<bool>,
}

/// Guild member payload (initial bulk load, member add, member chunk)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberPayload {
    pub user: UserPayload,
    #[serde(default, deserialize_with = "double_option")]
    pub nick: Option<Option<String>>,
    #[serde(default)]
    pub roles: Option<Vec<Snowflake>>,
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deaf: Option<bool>,
    #[serde(default)]
    pub mute: Option<bool>,
}

/// User payload, embedded in members, messages, and presences
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    pub id: Snowflake,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub discriminator: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub avatar: Option<Option<String>>,
    #[serde(default)]
    pub bot: Option<bool>,
}

/// Presence payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresencePayload {
    pub user: UserPayload,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub game: Option<Option<ActivityPayload>>,
}

/// Activity attached to a presence
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityPayload {
    pub name: String,
}

/// Guild role payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RolePayload {
    pub id: Snowflake,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<u32>,
    #[serde(default)]
    pub hoist: Option<bool>,
    #[serde(default)]
    pub position: Option<i32>,
    #[serde(default)]
    pub permissions: Option<Permissions>,
    #[serde(default)]
    pub managed: Option<bool>,
    #[serde(default)]
    pub mentionable: Option<bool>,
}

/// Voice state payload, attached to an already-loaded member
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoiceStatePayload {
    pub user_id: Snowflake,
    #[serde(default)]
    pub channel_id: Option<Snowflake>,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub deaf: bool,
    #[serde(default)]
    pub mute: bool,
    #[serde(default)]
    pub self_deaf: bool,
    #[serde(default)]
    pub self_mute: bool,
    #[serde(default)]
    pub suppress: bool,
}

/// Message payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagePayload {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
    #[serde(default)]
    pub author: Option<UserPayload>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub reactions: Option<Vec<ReactionPayload>>,
}

/// Aggregated reaction entry carried inside a message payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReactionPayload {
    pub count: u32,
    #[serde(default)]
    pub me: bool,
    pub emoji: EmojiRefPayload,
}

/// Emoji reference: custom emojis carry an id, unicode emojis only a name
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmojiRefPayload {
    #[serde(default)]
    pub id: Option<Snowflake>,
    #[serde(default)]
    pub name: Option<String>,
}
